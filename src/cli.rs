// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;
use std::fmt::Formatter;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use quizdeck_core::Fallible;
use quizdeck_core::QuizType;
use quizdeck_core::fail;
use quizdeck_core::forms::generate::GenerateForm;
use quizdeck_core::forms::highlights::MIN_MATCH_SELECTION;
use quizdeck_core::forms::tags::TagList;
use quizdeck_core::types::ai::Difficulty;
use quizdeck_core::types::ai::ImportPayload;
use quizdeck_core::types::content::ContentQuery;
use quizdeck_core::types::page::PageQuery;
use quizdeck_core::types::quiz::QuizQuery;
use quizdeck_core::types::user::Credentials;
use serde::Serialize;
use serde_json::Value;

use crate::client::ApiClient;
use crate::config::Config;
use crate::config::Overrides;
use crate::hooks::LearningHelpers;
use crate::hooks::QuizSubmitter;
use crate::hooks::SharedProfile;
use crate::utils::read_upload;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML config file. By default, `quizdeck.toml` in the working directory is used if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Base URL of the API server.
    #[arg(long, global = true, env = "QUIZDECK_API_BASE_URL")]
    base_url: Option<String>,
    /// API port, used when the server runs on localhost. Default is 8000.
    #[arg(long, global = true, env = "QUIZDECK_API_PORT")]
    port: Option<u16>,
    /// API key, as printed by `login`.
    #[arg(long, global = true, env = "QUIZDECK_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and print the API key.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "QUIZDECK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and print the API key.
    Register {
        #[arg(long)]
        email: String,
        #[arg(long, env = "QUIZDECK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Print the current user's profile.
    Me,
    /// Commands relating to content items.
    Contents {
        #[command(subcommand)]
        command: ContentCommand,
    },
    /// Print a content item's cards.
    Cards { content_id: i64 },
    /// Commands relating to quizzes.
    Quizzes {
        #[command(subcommand)]
        command: QuizCommand,
    },
    /// Import content items with their cards from a JSON file.
    Import {
        file: PathBuf,
        /// Upload the file and let the server parse it.
        #[arg(long)]
        upload: bool,
    },
    /// Generate quizzes from a text file with the AI endpoint.
    Generate {
        /// Path to the text to generate from.
        file: PathBuf,
        /// Store the text and the generated quizzes under this title.
        #[arg(long)]
        title: Option<String>,
        /// A highlight to focus on. May be repeated. MATCH quizzes need at
        /// least three distinct highlights.
        #[arg(long = "highlight")]
        highlights: Vec<String>,
        /// Comma-separated keywords.
        #[arg(long)]
        keywords: Option<String>,
        /// A quiz type to generate. May be repeated. By default, all types
        /// are generated, leaving out MATCH when fewer than three highlights
        /// are given.
        #[arg(long = "type")]
        types: Vec<QuizType>,
        #[arg(long, default_value_t = DifficultyArg::Medium)]
        difficulty: DifficultyArg,
        /// Bypass the server's generation cache.
        #[arg(long)]
        no_cache: bool,
        /// Replace an existing content item with the same title.
        #[arg(long)]
        upsert: bool,
    },
    /// List learning helpers.
    Helpers {
        /// Only list helpers unlocked at this level.
        #[arg(long)]
        unlocked_at: Option<i64>,
    },
    /// List card decks.
    Decks,
    /// List rewards.
    Rewards,
    /// List study sessions.
    Sessions {
        /// List public sessions instead of your own.
        #[arg(long)]
        public: bool,
    },
    /// Record an answer to a quiz.
    Submit {
        quiz_id: i64,
        /// Whether the answer was correct.
        #[arg(long)]
        correct: bool,
    },
}

#[derive(Subcommand)]
enum ContentCommand {
    /// List content items.
    List {
        /// Search text.
        #[arg(long)]
        q: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        size: Option<u32>,
        /// Sort order, e.g. `created_desc`.
        #[arg(long)]
        order: Option<String>,
    },
    /// Print one content item.
    Show { id: i64 },
    /// Export visible content items as JSON.
    Export {
        /// Optional path to the output file. By default, the output is printed to stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Delete a content item and its quizzes.
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum QuizCommand {
    /// List quizzes.
    List {
        #[arg(long)]
        content_id: Option<i64>,
        #[arg(long = "type")]
        quiz_type: Option<QuizType>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        size: Option<u32>,
    },
    /// Print one quiz.
    Show { id: i64 },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl Display for DifficultyArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DifficultyArg::Easy => write!(f, "easy"),
            DifficultyArg::Medium => write!(f, "medium"),
            DifficultyArg::Hard => write!(f, "hard"),
        }
    }
}

impl From<DifficultyArg> for Difficulty {
    fn from(value: DifficultyArg) -> Self {
        match value {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Cli = Cli::parse();
    let overrides = Overrides {
        config: cli.config,
        base_url: cli.base_url,
        port: cli.port,
        api_key: cli.api_key,
    };
    let config = Config::load(&overrides)?;
    log::debug!("Using API at {}", config.base_url);
    let client = config.client();
    let mut stdout = std::io::stdout().lock();
    run(cli.command, &client, &mut stdout).await
}

/// The types to tick on the generate form. Repeated flags count once. With no
/// flags, every type the highlights allow is requested.
fn requested_types(types: Vec<QuizType>, highlights: usize) -> Vec<QuizType> {
    let mut requested: Vec<QuizType> = Vec::new();
    for quiz_type in types {
        if !requested.contains(&quiz_type) {
            requested.push(quiz_type);
        }
    }
    if requested.is_empty() && highlights < MIN_MATCH_SELECTION {
        log::info!("fewer than {MIN_MATCH_SELECTION} highlights; not requesting MATCH quizzes");
        requested = QuizType::ALL
            .into_iter()
            .filter(|t| *t != QuizType::Match)
            .collect();
    }
    requested
}

fn print_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Fallible<()> {
    let text = serde_json::to_string_pretty(value)?;
    writeln!(out, "{text}")?;
    Ok(())
}

async fn run(command: Command, client: &ApiClient, out: &mut dyn Write) -> Fallible<()> {
    match command {
        Command::Login { email, password } => {
            let auth = client.login(&Credentials { email, password }).await?;
            print_json(out, &auth)?;
            eprintln!("export QUIZDECK_API_KEY={}", auth.api_key);
            Ok(())
        }
        Command::Register { email, password } => {
            let auth = client.register(&Credentials { email, password }).await?;
            print_json(out, &auth)?;
            eprintln!("export QUIZDECK_API_KEY={}", auth.api_key);
            Ok(())
        }
        Command::Me => print_json(out, &client.me().await?),
        Command::Contents { command } => match command {
            ContentCommand::List {
                q,
                page,
                size,
                order,
            } => {
                let query = ContentQuery {
                    q,
                    page,
                    size,
                    order,
                };
                print_json(out, &client.list_contents(&query).await?)
            }
            ContentCommand::Show { id } => print_json(out, &client.get_content(id).await?),
            ContentCommand::Export { output } => {
                let bytes = client.export_contents().await?;
                match output {
                    Some(path) => {
                        tokio::fs::write(&path, &bytes).await?;
                        log::info!("Wrote {} bytes to {}", bytes.len(), path.display());
                    }
                    None => out.write_all(&bytes)?,
                }
                Ok(())
            }
            ContentCommand::Delete { id } => {
                client.delete_content(id).await?;
                log::info!("Deleted content {id}");
                Ok(())
            }
        },
        Command::Cards { content_id } => print_json(out, &client.content_cards(content_id).await?),
        Command::Quizzes { command } => match command {
            QuizCommand::List {
                content_id,
                quiz_type,
                page,
                size,
            } => {
                let query = QuizQuery {
                    content_id,
                    quiz_type,
                    page,
                    size,
                };
                print_json(out, &client.list_quizzes(&query).await?)
            }
            QuizCommand::Show { id } => print_json(out, &client.get_quiz(id).await?),
        },
        Command::Import { file, upload } => {
            let outcome = if upload {
                client.import_file(read_upload(&file).await?).await?
            } else {
                let text = tokio::fs::read_to_string(&file).await?;
                match serde_json::from_str::<Value>(&text)? {
                    Value::Array(items) => {
                        let payloads = items
                            .into_iter()
                            .map(serde_json::from_value::<ImportPayload>)
                            .collect::<Result<Vec<_>, _>>()?;
                        client.import_many(&payloads).await?
                    }
                    value @ Value::Object(_) => {
                        let payload: ImportPayload = serde_json::from_value(value)?;
                        client.import_one(&payload).await?
                    }
                    _ => return fail("import file must hold an object or a list of objects"),
                }
            };
            print_json(out, &outcome.into_vec())
        }
        Command::Generate {
            file,
            title,
            highlights,
            keywords,
            types,
            difficulty,
            no_cache,
            upsert,
        } => {
            let text = tokio::fs::read_to_string(&file).await?;
            let mut form = GenerateForm::new(text, highlights);
            form.highlights.select_all();
            if let Some(keywords) = keywords {
                form.keywords = TagList::new();
                form.keywords.add(&keywords);
            }
            for quiz_type in requested_types(types, form.highlights.selected_count()) {
                form.toggle_type(quiz_type);
            }
            form.difficulty = difficulty.into();
            form.no_cache = no_cache;
            form.upsert = upsert;
            match title {
                Some(title) => {
                    form.title = title;
                    let request = form.to_import_request()?;
                    print_json(out, &client.generate_and_import(&request).await?)
                }
                None => {
                    let request = form.to_request()?;
                    print_json(out, &client.generate(&request).await?)
                }
            }
        }
        Command::Helpers { unlocked_at } => {
            let mut helpers = LearningHelpers::new(client.clone());
            helpers.load().await;
            if let Some(message) = helpers.error() {
                return fail(message);
            }
            match unlocked_at {
                Some(level) => {
                    let unlocked: Vec<_> = helpers.unlocked_at(level).collect();
                    print_json(out, &unlocked)
                }
                None => print_json(out, helpers.helpers()),
            }
        }
        Command::Decks => print_json(out, &client.list_decks(&PageQuery::default()).await?),
        Command::Rewards => print_json(out, &client.list_rewards().await?),
        Command::Sessions { public } => {
            let query = PageQuery::default();
            let page = if public {
                client.list_public_sessions(&query).await?
            } else {
                client.list_sessions(&query).await?
            };
            print_json(out, &page)
        }
        Command::Submit { quiz_id, correct } => {
            let auth = Arc::new(SharedProfile::new(Some(client.me().await?)));
            let mut submitter = QuizSubmitter::new(client.clone(), Arc::clone(&auth));
            let result = submitter.submit(quiz_id, correct).await?;
            submitter.wait_for_refresh().await;
            print_json(out, &result)?;
            if let Some(profile) = auth.profile() {
                log::info!(
                    "Level {} with {} points, {} to the next level",
                    profile.level,
                    profile.points,
                    profile.points_to_next_level
                );
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use axum::Json;
    use axum::Router;
    use axum::routing::get;
    use axum::routing::post;
    use serde_json::json;
    use tempfile::tempdir;

    use super::*;
    use crate::testing::content_json;
    use crate::testing::helper_json;
    use crate::testing::serve;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = parse(&[
            "quizdeck",
            "contents",
            "list",
            "--q",
            "joseon",
            "--base-url",
            "https://quiz.example.com",
        ]);
        assert_eq!(cli.base_url.as_deref(), Some("https://quiz.example.com"));
        match cli.command {
            Command::Contents {
                command: ContentCommand::List { q, .. },
            } => assert_eq!(q.as_deref(), Some("joseon")),
            _ => panic!("wrong command"),
        }
    }

    #[test]
    fn test_parse_quiz_types_case_insensitively() {
        let cli = parse(&[
            "quizdeck", "generate", "notes.txt", "--type", "mcq", "--type", "Match",
        ]);
        match cli.command {
            Command::Generate {
                types, difficulty, ..
            } => {
                assert_eq!(types, vec![QuizType::Mcq, QuizType::Match]);
                assert_eq!(difficulty, DifficultyArg::Medium);
            }
            _ => panic!("wrong command"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_quiz_type() {
        let result = Cli::try_parse_from(["quizdeck", "quizzes", "list", "--type", "essay"]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_run_contents_show() -> Fallible<()> {
        let app = Router::new().route(
            "/contents/{id}",
            get(|| async { Json(content_json(3, "Joseon")) }),
        );
        let client = serve(app).await?;
        let mut out = Vec::new();
        let command = Command::Contents {
            command: ContentCommand::Show { id: 3 },
        };
        run(command, &client, &mut out).await?;
        let printed: Value = serde_json::from_slice(&out)?;
        assert_eq!(printed["title"], "Joseon");
        Ok(())
    }

    #[tokio::test]
    async fn test_run_helpers_reports_load_error() -> Fallible<()> {
        let client = serve(Router::new()).await?;
        let mut out = Vec::new();
        let result = run(Command::Helpers { unlocked_at: None }, &client, &mut out).await;
        assert!(result.is_err());
        assert!(out.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_run_helpers_filters_by_level() -> Fallible<()> {
        let app = Router::new().route(
            "/helpers",
            get(|| async {
                Json(json!({"items": [helper_json(1, "Owl", 1), helper_json(2, "Fox", 5)]}))
            }),
        );
        let client = serve(app).await?;
        let mut out = Vec::new();
        run(Command::Helpers { unlocked_at: Some(2) }, &client, &mut out).await?;
        let printed: Value = serde_json::from_slice(&out)?;
        assert_eq!(printed.as_array().map(Vec::len), Some(1));
        assert_eq!(printed[0]["name"], "Owl");
        Ok(())
    }

    #[tokio::test]
    async fn test_run_import_list_file() -> Fallible<()> {
        let app = Router::new().route(
            "/import/json",
            post(|Json(body): Json<Value>| async move {
                let count = body.as_array().map(Vec::len).unwrap_or(0) as i64;
                let results: Vec<Value> = (1..=count)
                    .map(|id| json!({"content_id": id, "highlight_ids": [], "quiz_ids": [], "counts": {}}))
                    .collect();
                Json(Value::Array(results))
            }),
        );
        let client = serve(app).await?;
        let dir = tempdir()?;
        let path = dir.path().join("contents.json");
        write(
            &path,
            r#"[{"title": "Goryeo", "content": "..."}, {"title": "Joseon", "content": "..."}]"#,
        )?;
        let mut out = Vec::new();
        let command = Command::Import {
            file: path,
            upload: false,
        };
        run(command, &client, &mut out).await?;
        let printed: Value = serde_json::from_slice(&out)?;
        assert_eq!(printed[1]["content_id"], 2);
        Ok(())
    }

    #[test]
    fn test_requested_types_skip_match_without_enough_highlights() {
        let types = requested_types(Vec::new(), 1);
        assert_eq!(types.len(), 5);
        assert!(!types.contains(&QuizType::Match));
        assert_eq!(requested_types(Vec::new(), 3), Vec::<QuizType>::new());
        assert_eq!(
            requested_types(vec![QuizType::Ox, QuizType::Ox, QuizType::Match], 0),
            vec![QuizType::Ox, QuizType::Match]
        );
    }

    #[tokio::test]
    async fn test_run_generate_with_one_highlight() -> Fallible<()> {
        let app = Router::new().route(
            "/ai/generate",
            post(|Json(body): Json<Value>| async move {
                Json(json!({"cards": [], "facts": body["types"].clone(), "meta": {"cached": false}}))
            }),
        );
        let client = serve(app).await?;
        let dir = tempdir()?;
        let path = dir.path().join("notes.txt");
        write(&path, "King Sejong promulgated Hangul in 1446.")?;
        let mut out = Vec::new();
        let command = Command::Generate {
            file: path,
            title: None,
            highlights: vec!["Hangul".into(), "Hangul".into()],
            keywords: None,
            types: Vec::new(),
            difficulty: DifficultyArg::Medium,
            no_cache: false,
            upsert: false,
        };
        run(command, &client, &mut out).await?;
        let printed: Value = serde_json::from_slice(&out)?;
        let types = printed["facts"].as_array().map(Vec::len);
        assert_eq!(types, Some(5));
        assert!(!printed["facts"].as_array().is_some_and(|t| t.contains(&json!("MATCH"))));
        Ok(())
    }
}
