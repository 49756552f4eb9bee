//! Built-in package metadata prompts
//!
//! Registration order doubles as the asking order: later defaults read
//! answers recorded by earlier prompts (`title` reads `name`, `homepage`
//! reads `repository`, ...).

use crate::answers::{AnswerValue, Answers, NONE_VALUE};
use crate::context::ProjectEnv;
use crate::error::{PromptError, Result};
use crate::licenses::LicenseCatalog;
use crate::prompt::{DefaultProvider, PromptDefinition, Sanitized, Sanitizer, Validator};
use crate::registry::PromptRegistry;
use crate::vcs::{github_url, GitQuery};
use crate::version::{is_valid_version, version_from_describe, FALLBACK_VERSION};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_\-.]+$").unwrap());
static NAME_DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\-.]").unwrap());
static NON_WORD_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9]+").unwrap());
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9_]+").unwrap());
static LEADING_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9])").unwrap());
static SCP_HOST: Lazy<Regex> = Lazy::new(|| Regex::new(r"^git@([^:]+):").unwrap());

const ANY_CHARACTERS: &str = "May consist of any characters.";
const PUBLIC_URL: &str = "Should be a public URL.";
const VERSION_RANGE: &str = "Must be a valid semantic version range descriptor.";
const RELATIVE_PATH: &str = "Must be a path relative to the project root.";

impl PromptRegistry {
    /// Registry holding every built-in prompt
    pub fn builtin(
        env: Arc<ProjectEnv>,
        git: Arc<dyn GitQuery>,
        licenses: &LicenseCatalog,
    ) -> Self {
        let mut registry = Self::new();
        for definition in builtin_prompts(env, git, licenses) {
            registry.register(definition);
        }
        registry
    }
}

/// The built-in prompts, in asking order
pub fn builtin_prompts(
    env: Arc<ProjectEnv>,
    git: Arc<dyn GitQuery>,
    licenses: &LicenseCatalog,
) -> Vec<PromptDefinition> {
    vec![
        PromptDefinition::new("name", "Project name")
            .with_provider(NameDefault { env: env.clone() })
            .with_validator(Validator::Pattern(NAME_PATTERN.clone()))
            .with_warning("Must be only letters, numbers, dashes, dots or underscores.")
            .with_sanitize_fn(derive_safe_names),
        PromptDefinition::new("title", "Project title")
            .with_default_fn(|answers| Some(title_case(answers.text("name").unwrap_or("")).into()))
            .with_warning(ANY_CHARACTERS),
        PromptDefinition::new("description", "Description")
            .with_default("The best project ever.")
            .with_warning(ANY_CHARACTERS),
        PromptDefinition::new("version", "Version")
            .with_provider(VersionDefault { git: git.clone() })
            .with_validator(Validator::predicate(|v| is_valid_version(&v.to_string())))
            .with_warning("Must be a valid semantic version (semver.org)."),
        PromptDefinition::new("repository", "Project git repository")
            .with_provider(RepositoryDefault {
                env: env.clone(),
                git: git.clone(),
            })
            .with_sanitizer(RepositoryOwner {
                env: env.clone(),
                git: git.clone(),
            })
            .with_warning("Should be a public git:// URI."),
        PromptDefinition::new("homepage", "Project homepage")
            .with_default_fn(|answers| repository_page(answers, None))
            .with_warning(PUBLIC_URL),
        PromptDefinition::new("bugs", "Project issues tracker")
            .with_default_fn(|answers| repository_page(answers, Some("issues")))
            .with_warning(PUBLIC_URL),
        PromptDefinition::new("licenses", "Licenses")
            .with_default("MIT")
            .with_warning(licenses.warning())
            .with_sanitize_fn(split_licenses),
        PromptDefinition::new("author_name", "Author name")
            .with_provider(GitConfigDefault {
                git: git.clone(),
                key: "user.name",
            })
            .with_warning(ANY_CHARACTERS),
        PromptDefinition::new("author_email", "Author email")
            .with_provider(GitConfigDefault {
                git,
                key: "user.email",
            })
            .with_warning("Should be a valid email address."),
        PromptDefinition::new("author_url", "Author url")
            .with_default(NONE_VALUE)
            .with_warning(PUBLIC_URL),
        PromptDefinition::new("jquery_version", "Required jQuery version")
            .with_default("*")
            .with_warning(VERSION_RANGE),
        PromptDefinition::new("node_version", "What versions of node does it run on?")
            .with_default(">= 0.8.0")
            .with_warning(VERSION_RANGE),
        PromptDefinition::new("main", "Main module/entry point")
            .with_default_fn(|answers| Some(format!("lib/{}.js", slug(answers)).into()))
            .with_warning(RELATIVE_PATH),
        PromptDefinition::new("bin", "CLI script")
            .with_default_fn(|answers| Some(format!("bin/{}", slug(answers)).into()))
            .with_warning(RELATIVE_PATH),
        PromptDefinition::new("npm_test", "Npm test command")
            .with_default("grunt nodeunit")
            .with_warning("Must be an executable command."),
        PromptDefinition::new("grunt_version", "What versions of grunt does it require?")
            .with_default("~0.4.1")
            .with_warning(VERSION_RANGE),
        PromptDefinition::new("travis", "Will this project be tested with Travis CI?")
            .with_default("Y/n")
            .with_warning(
                "If selected, you must enable Travis support for this project in \
                 https://travis-ci.org/profile",
            ),
    ]
}

/// Project name guessed from the directory name
struct NameDefault {
    env: Arc<ProjectEnv>,
}

#[async_trait]
impl DefaultProvider for NameDefault {
    async fn provide(&self, _name: &str, answers: &Answers) -> Result<Option<AnswerValue>> {
        let name = strip_type_affixes(&self.env.dir_name(), answers.text("type"))?;
        Ok(Some(NAME_DISALLOWED.replace_all(&name, "").into_owned().into()))
    }
}

/// Remove `js-`/`javascript.`/`<type>_` prefixes and `-<type>`/`.js` suffixes
fn strip_type_affixes(dir_name: &str, project_type: Option<&str>) -> Result<String> {
    let mut types = vec!["javascript".to_string(), "js".to_string()];
    if let Some(project_type) = project_type.filter(|t| !t.is_empty()) {
        types.push(regex::escape(project_type));
    }
    let ty = format!("(?:{})", types.join("|"));
    let affixes = Regex::new(&format!(
        r"(?i)^{ty}[\-._]?|(?:[\-._]?{ty})?(?:[\-._]?js)?$",
        ty = ty
    ))?;
    Ok(affixes.replace_all(dir_name, "").into_owned())
}

/// Records `js_safe_name` and `js_test_safe_name` next to the project name
fn derive_safe_names(value: &AnswerValue, answers: &mut Answers) -> Sanitized {
    let underscored = NON_WORD_RUN.replace_all(&value.to_string(), "_").into_owned();
    let js_safe_name = LEADING_DIGIT.replace(&underscored, "_$1").into_owned();
    let js_test_safe_name = if js_safe_name == "test" {
        "myTest".to_string()
    } else {
        js_safe_name.clone()
    };

    answers.insert("js_safe_name", js_safe_name);
    answers.insert("js_test_safe_name", js_test_safe_name);
    Sanitized::Unchanged
}

fn title_case(name: &str) -> String {
    let spaced = NON_WORD_RUN.replace_all(name, " ");
    WORD.replace_all(&spaced, |caps: &regex::Captures| {
        let word = &caps[0];
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
            None => String::new(),
        }
    })
    .into_owned()
}

struct VersionDefault {
    git: Arc<dyn GitQuery>,
}

#[async_trait]
impl DefaultProvider for VersionDefault {
    async fn provide(&self, _name: &str, _answers: &Answers) -> Result<Option<AnswerValue>> {
        let version = match self.git.describe_tags().await {
            Ok(describe) => version_from_describe(&describe),
            Err(_) => None,
        };
        Ok(Some(version.unwrap_or_else(|| FALLBACK_VERSION.to_string()).into()))
    }
}

/// The origin remote as a `git://` URL, or a guess built from the user and directory names
struct RepositoryDefault {
    env: Arc<ProjectEnv>,
    git: Arc<dyn GitQuery>,
}

#[async_trait]
impl DefaultProvider for RepositoryDefault {
    async fn provide(&self, _name: &str, _answers: &Answers) -> Result<Option<AnswerValue>> {
        let repository = match self.git.origin().await {
            Ok(origin) => SCP_HOST.replace(&origin, "git://$1/").into_owned(),
            Err(_) => format!(
                "git://github.com/{}/{}.git",
                self.env.user_or_unknown(),
                self.env.dir_name()
            ),
        };
        Ok(Some(repository.into()))
    }
}

/// Records `git_user` and `git_repo` for the chosen repository
struct RepositoryOwner {
    env: Arc<ProjectEnv>,
    git: Arc<dyn GitQuery>,
}

#[async_trait]
impl Sanitizer for RepositoryOwner {
    async fn sanitize(&self, value: &AnswerValue, answers: &mut Answers) -> Sanitized {
        let page = github_url(&value.to_string(), None);
        let parts: Option<(String, String)> = page.as_deref().and_then(|url| {
            let mut segments = url.rsplit('/');
            let repo = segments.next()?;
            let user = segments.next()?;
            Some((user.to_string(), repo.to_string()))
        });

        let (user, repo) = match parts {
            Some(parts) => parts,
            None => {
                let user = match self.git.config_get("github.user").await {
                    Ok(user) if !user.is_empty() => user,
                    _ => self.env.user_or_unknown().to_string(),
                };
                (user, self.env.dir_name())
            }
        };

        answers.insert("git_user", user);
        answers.insert("git_repo", repo);
        Sanitized::Unchanged
    }
}

fn repository_page(answers: &Answers, suffix: Option<&str>) -> Option<AnswerValue> {
    let repository = answers.text("repository")?;
    github_url(repository, suffix).map(AnswerValue::from)
}

/// Space-separated licenses become a list
fn split_licenses(value: &AnswerValue, _answers: &mut Answers) -> Sanitized {
    match value {
        AnswerValue::Text(text) => Sanitized::Replaced(AnswerValue::List(
            text.split_whitespace().map(String::from).collect(),
        )),
        AnswerValue::List(_) => Sanitized::Unchanged,
    }
}

/// Default read from `git config --get <key>`; failures are reported, not guessed
struct GitConfigDefault {
    git: Arc<dyn GitQuery>,
    key: &'static str,
}

#[async_trait]
impl DefaultProvider for GitConfigDefault {
    async fn provide(&self, name: &str, _answers: &Answers) -> Result<Option<AnswerValue>> {
        let value = self
            .git
            .config_get(self.key)
            .await
            .map_err(|e| PromptError::provider(name, e))?;
        Ok(Some(value.into()))
    }
}

/// `slugname` when a template recorded one, otherwise the project name
fn slug(answers: &Answers) -> String {
    answers
        .text("slugname")
        .or_else(|| answers.text("name"))
        .unwrap_or(NONE_VALUE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{resolve_default, validate};
    use crate::prompt::PromptItem;

    /// Git stand-in with canned answers; `None` simulates a failing command
    #[derive(Default)]
    struct FakeGit {
        origin: Option<String>,
        describe: Option<String>,
        user_name: Option<String>,
        github_user: Option<String>,
    }

    fn failure(what: &str) -> PromptError {
        PromptError::Command {
            command: format!("git {}", what),
            message: "exit code 1".to_string(),
        }
    }

    #[async_trait]
    impl GitQuery for FakeGit {
        async fn origin(&self) -> Result<String> {
            self.origin
                .clone()
                .ok_or_else(|| PromptError::NotFound("git origin".to_string()))
        }

        async fn config_get(&self, key: &str) -> Result<String> {
            let value = match key {
                "user.name" => self.user_name.clone(),
                "github.user" => self.github_user.clone(),
                _ => None,
            };
            value.ok_or_else(|| failure(key))
        }

        async fn describe_tags(&self) -> Result<String> {
            self.describe.clone().ok_or_else(|| failure("describe"))
        }
    }

    fn registry_in(dir: &str, git: FakeGit) -> PromptRegistry {
        let env = Arc::new(ProjectEnv::new(dir, Some("octocat".to_string())));
        PromptRegistry::builtin(env, Arc::new(git), &LicenseCatalog::builtin())
    }

    fn definition(registry: &PromptRegistry, name: &str) -> PromptDefinition {
        match registry.expand(&[PromptItem::from(name)]).remove(0) {
            PromptItem::Definition(def) => def,
            PromptItem::Name(name) => panic!("{} is not built in", name),
        }
    }

    async fn default_of(registry: &PromptRegistry, name: &str, answers: &Answers) -> AnswerValue {
        resolve_default(&definition(registry, name), answers)
            .await
            .unwrap()
            .resolved_default()
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_catalog_order() {
        let registry = registry_in("/tmp/demo", FakeGit::default());
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names.len(), 18);
        assert_eq!(&names[..5], &["name", "title", "description", "version", "repository"]);
        assert_eq!(names.last(), Some(&"travis"));
    }

    #[tokio::test]
    async fn test_name_from_directory_and_safe_names() {
        let registry = registry_in("/work/my-cool-app", FakeGit::default());
        let mut answers = Answers::new();

        let default = default_of(&registry, "name", &answers).await;
        assert_eq!(default, AnswerValue::text("my-cool-app"));

        let outcome = validate(&definition(&registry, "name"), default, &mut answers).await;
        assert!(outcome.valid);
        assert_eq!(outcome.value, AnswerValue::text("my-cool-app"));
        assert_eq!(answers.text("js_safe_name"), Some("my_cool_app"));
        assert_eq!(answers.text("js_test_safe_name"), Some("my_cool_app"));
    }

    #[test]
    fn test_type_affixes_are_stripped() {
        assert_eq!(strip_type_affixes("js-lib", None).unwrap(), "lib");
        assert_eq!(strip_type_affixes("grunt-init.js", None).unwrap(), "grunt-init");
        assert_eq!(strip_type_affixes("JavaScript_tools", None).unwrap(), "tools");
        assert_eq!(
            strip_type_affixes("jquery-tooltip-jquery", Some("jquery")).unwrap(),
            "tooltip"
        );
    }

    #[tokio::test]
    async fn test_name_drops_disallowed_characters() {
        let registry = registry_in("/work/my app (copy)", FakeGit::default());
        let default = default_of(&registry, "name", &Answers::new()).await;
        assert_eq!(default, AnswerValue::text("myappcopy"));
    }

    #[test]
    fn test_safe_names_edge_cases() {
        let mut answers = Answers::new();
        derive_safe_names(&AnswerValue::text("3d.engine"), &mut answers);
        assert_eq!(answers.text("js_safe_name"), Some("_3d_engine"));

        derive_safe_names(&AnswerValue::text("test"), &mut answers);
        assert_eq!(answers.text("js_safe_name"), Some("test"));
        assert_eq!(answers.text("js_test_safe_name"), Some("myTest"));
    }

    #[tokio::test]
    async fn test_title_from_name() {
        let registry = registry_in("/tmp/demo", FakeGit::default());
        let mut answers = Answers::new();
        answers.insert("name", "my-cool_APP.js");

        let title = default_of(&registry, "title", &answers).await;
        assert_eq!(title, AnswerValue::text("My Cool App Js"));
    }

    #[tokio::test]
    async fn test_non_ascii_names_follow_ascii_word_rules() {
        let registry = registry_in("/tmp/demo", FakeGit::default());
        let mut answers = Answers::new();

        let outcome = validate(&definition(&registry, "name"), "café-app".into(), &mut answers).await;
        assert!(!outcome.valid);
        assert_eq!(answers.text("js_safe_name"), Some("caf_app"));
        assert_eq!(answers.text("js_test_safe_name"), Some("caf_app"));

        assert_eq!(title_case("émile-app"), " Mile App");
        assert_eq!(title_case("Ünïcode"), " N Code");
    }

    #[tokio::test]
    async fn test_title_without_name_is_none() {
        let registry = registry_in("/tmp/demo", FakeGit::default());
        let title = default_of(&registry, "title", &Answers::new()).await;
        assert_eq!(title, AnswerValue::none());
    }

    #[tokio::test]
    async fn test_version_from_tags_or_fallback() {
        let tagged = registry_in(
            "/tmp/demo",
            FakeGit {
                describe: Some("v2.3.1-4-gdeadbee".to_string()),
                ..FakeGit::default()
            },
        );
        let untagged = registry_in("/tmp/demo", FakeGit::default());
        let answers = Answers::new();

        assert_eq!(default_of(&tagged, "version", &answers).await, AnswerValue::text("2.3.1"));
        assert_eq!(default_of(&untagged, "version", &answers).await, AnswerValue::text("0.1.0"));
    }

    #[tokio::test]
    async fn test_version_validator() {
        let registry = registry_in("/tmp/demo", FakeGit::default());
        let def = definition(&registry, "version");
        let mut answers = Answers::new();

        assert!(validate(&def, "1.0.0".into(), &mut answers).await.valid);
        assert!(!validate(&def, "1.0".into(), &mut answers).await.valid);
    }

    #[tokio::test]
    async fn test_repository_default_rewrites_scp_origin() {
        let registry = registry_in(
            "/tmp/demo",
            FakeGit {
                origin: Some("git@github.com:user/repo.git".to_string()),
                ..FakeGit::default()
            },
        );
        let default = default_of(&registry, "repository", &Answers::new()).await;
        assert_eq!(default, AnswerValue::text("git://github.com/user/repo.git"));
    }

    #[tokio::test]
    async fn test_repository_default_guesses_without_origin() {
        let registry = registry_in("/tmp/demo", FakeGit::default());
        let default = default_of(&registry, "repository", &Answers::new()).await;
        assert_eq!(default, AnswerValue::text("git://github.com/octocat/demo.git"));
    }

    #[tokio::test]
    async fn test_repository_sanitizer_records_owner() {
        let registry = registry_in("/tmp/demo", FakeGit::default());
        let def = definition(&registry, "repository");
        let mut answers = Answers::new();

        let outcome = validate(&def, "git://github.com/user/repo.git".into(), &mut answers).await;
        assert_eq!(outcome.value, AnswerValue::text("git://github.com/user/repo.git"));
        assert_eq!(answers.text("git_user"), Some("user"));
        assert_eq!(answers.text("git_repo"), Some("repo"));
    }

    #[tokio::test]
    async fn test_repository_sanitizer_falls_back_to_git_config() {
        let with_config = registry_in(
            "/tmp/demo",
            FakeGit {
                github_user: Some("hubber".to_string()),
                ..FakeGit::default()
            },
        );
        let mut answers = Answers::new();
        validate(
            &definition(&with_config, "repository"),
            "https://gitlab.com/x/y.git".into(),
            &mut answers,
        )
        .await;
        assert_eq!(answers.text("git_user"), Some("hubber"));
        assert_eq!(answers.text("git_repo"), Some("demo"));

        let without_config = registry_in("/tmp/demo", FakeGit::default());
        let mut answers = Answers::new();
        validate(&definition(&without_config, "repository"), "none".into(), &mut answers).await;
        assert_eq!(answers.text("git_user"), Some("octocat"));
    }

    #[tokio::test]
    async fn test_homepage_and_bugs_follow_repository() {
        let registry = registry_in("/tmp/demo", FakeGit::default());
        let mut answers = Answers::new();
        answers.insert("repository", "git://github.com/user/repo.git");

        assert_eq!(
            default_of(&registry, "homepage", &answers).await,
            AnswerValue::text("https://github.com/user/repo")
        );
        assert_eq!(
            default_of(&registry, "bugs", &answers).await,
            AnswerValue::text("https://github.com/user/repo/issues")
        );

        let elsewhere = Answers::new();
        assert_eq!(default_of(&registry, "homepage", &elsewhere).await, AnswerValue::none());
    }

    #[tokio::test]
    async fn test_licenses_are_split() {
        let registry = registry_in("/tmp/demo", FakeGit::default());
        let def = definition(&registry, "licenses");
        assert!(def.warning.as_deref().unwrap_or("").contains("MIT"));

        let mut answers = Answers::new();
        let outcome = validate(&def, "MIT  Apache-2.0".into(), &mut answers).await;
        assert_eq!(
            outcome.value,
            AnswerValue::List(vec!["MIT".to_string(), "Apache-2.0".to_string()])
        );
    }

    #[tokio::test]
    async fn test_author_name_from_git_config() {
        let registry = registry_in(
            "/tmp/demo",
            FakeGit {
                user_name: Some("Mona Lisa".to_string()),
                ..FakeGit::default()
            },
        );
        assert_eq!(
            default_of(&registry, "author_name", &Answers::new()).await,
            AnswerValue::text("Mona Lisa")
        );
    }

    #[tokio::test]
    async fn test_author_email_failure_is_reported() {
        let registry = registry_in("/tmp/demo", FakeGit::default());
        let result = resolve_default(&definition(&registry, "author_email"), &Answers::new()).await;
        assert!(matches!(result, Err(PromptError::Provider { prompt, .. }) if prompt == "author_email"));
    }

    #[tokio::test]
    async fn test_main_and_bin_use_slug_or_name() {
        let registry = registry_in("/tmp/demo", FakeGit::default());
        let mut answers = Answers::new();
        answers.insert("name", "demo");

        assert_eq!(default_of(&registry, "main", &answers).await, AnswerValue::text("lib/demo.js"));

        answers.insert("slugname", "demo-slug");
        assert_eq!(default_of(&registry, "bin", &answers).await, AnswerValue::text("bin/demo-slug"));
    }
}
