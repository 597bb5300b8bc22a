use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;

use sqldraft::api::{ApiClient, AuthApi, SessionContext, UserApi};
use sqldraft::cli::{CliArgs, CliCommand, SqlSource};
use sqldraft::draft_store::{DraftStoreAdapter, FileDraftStore};
use sqldraft::editor::{EditorController, EditorProps, MountedEditor};
use sqldraft::events::EditorEvent;
use sqldraft::keymap::{load_default_keymap, parse_key_string, Keymap};
use sqldraft::router::{guard, Navigation};
use sqldraft::shortcuts::InputRegistry;
use sqldraft::AppConfig;

fn main() -> ExitCode {
    sqldraft::tracing::init();

    match run(CliArgs::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<ExitCode> {
    let config = AppConfig::load();

    match args.command {
        CliCommand::Show { key } => {
            let store = open_store(args.memory, args.drafts)?;
            match store.get(&key)? {
                Some(draft) => {
                    print!("{}", draft);
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    eprintln!("No draft stored for '{}'", key);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        CliCommand::Save { key, file } => {
            let store = open_store(args.memory, args.drafts)?;
            let sql = read_sql(SqlSource::from_arg(file))?;
            let mut editor = new_controller(&config, Some(key.clone()), store);
            editor.set_code(sql);
            editor.save_draft()?;
            eprintln!("Saved draft '{}'", key);
            Ok(ExitCode::SUCCESS)
        }
        CliCommand::Clear { key } => {
            let store = open_store(args.memory, args.drafts)?;
            new_controller(&config, Some(key.clone()), store).clear_draft()?;
            eprintln!("Cleared draft '{}'", key);
            Ok(ExitCode::SUCCESS)
        }
        CliCommand::List => {
            let store = open_store(args.memory, args.drafts)?;
            for key in store.keys()? {
                println!("{}", key);
            }
            Ok(ExitCode::SUCCESS)
        }
        CliCommand::Run { key, file } => {
            let store = open_store(args.memory, args.drafts)?;
            let use_draft = key.is_some() && file.is_none();
            let mut editor = new_controller(&config, key, store);
            if !use_draft {
                editor.set_code(read_sql(SqlSource::from_arg(file))?);
            }
            editor.subscribe(print_event);
            if !editor.execute_sql() {
                eprintln!("Nothing to execute");
            }
            Ok(ExitCode::SUCCESS)
        }
        CliCommand::Press {
            key,
            keystrokes,
            file,
        } => {
            let store = open_store(args.memory, args.drafts)?;
            press(&config, store, key, &keystrokes, file)
        }
        CliCommand::Login { username, password } => with_api(&config, |client| async move {
            let login = AuthApi::new(client).login(&username, &password).await?;
            eprintln!("Logged in as {} ({:?})", login.username, login.role);
            Ok(())
        }),
        CliCommand::Logout => with_api(&config, |client| async move {
            AuthApi::new(client).logout().await?;
            eprintln!("Logged out");
            Ok(())
        }),
        CliCommand::Users => with_api(&config, |client| async move {
            if let Navigation::Redirect(to) = guard("/users", client.session()) {
                bail!("Not allowed to manage users (redirected to {})", to);
            }
            let users = UserApi::new(client).list().await?;
            for user in users.data {
                println!(
                    "{}\t{}\t{:?}\t{}",
                    user.id,
                    user.username,
                    user.role,
                    if user.enabled { "enabled" } else { "disabled" }
                );
            }
            Ok(())
        }),
    }
}

fn open_store(memory: bool, drafts: Option<PathBuf>) -> Result<DraftStoreAdapter> {
    if memory {
        return Ok(DraftStoreAdapter::in_memory());
    }
    let store = match drafts {
        Some(path) => FileDraftStore::open(path)?,
        None => FileDraftStore::open_default()?,
    };
    tracing::debug!("Using drafts file {}", store.path().display());
    Ok(DraftStoreAdapter::new(store))
}

fn props(config: &AppConfig, key: Option<String>) -> EditorProps {
    EditorProps::default()
        .with_draft_key(key)
        .with_height(config.editor.height.clone())
}

fn new_controller(
    config: &AppConfig,
    key: Option<String>,
    store: DraftStoreAdapter,
) -> EditorController {
    EditorController::new(props(config, key), store)
        .with_change_notifications(config.editor.notify_changes)
}

fn read_sql(source: SqlSource) -> Result<String> {
    match source {
        SqlSource::File(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display())),
        SqlSource::Stdin => {
            let mut sql = String::new();
            std::io::stdin()
                .read_to_string(&mut sql)
                .context("Failed to read SQL from stdin")?;
            Ok(sql)
        }
    }
}

fn print_event(event: &EditorEvent) {
    match event {
        EditorEvent::Execute(sql) => println!("{}", sql),
        EditorEvent::Save(sql) => eprintln!("Draft saved ({} bytes)", sql.len()),
        EditorEvent::Change(sql) => tracing::debug!(bytes = sql.len(), "Buffer changed"),
    }
}

fn press(
    config: &AppConfig,
    store: DraftStoreAdapter,
    key: String,
    keystrokes: &[String],
    file: Option<PathBuf>,
) -> Result<ExitCode> {
    let keymap = Keymap::with_bindings(load_default_keymap());
    let registry = InputRegistry::new();

    let controller = new_controller(config, Some(key), store);
    let mut mounted = MountedEditor::attach(controller, &registry, &keymap)?;
    for hint in mounted.shortcut_hints() {
        tracing::debug!("Shortcut: {}", hint);
    }

    if let Some(path) = file {
        mounted
            .controller_mut()
            .set_code(read_sql(SqlSource::File(path))?);
    }
    mounted.controller_mut().subscribe(print_event);

    for raw in keystrokes {
        let keystroke = parse_key_string(raw).with_context(|| format!("Bad keystroke '{}'", raw))?;
        if mounted.press(&registry, &keystroke)? == 0 {
            eprintln!("No shortcut bound to {}", raw);
        }
    }

    drop(mounted);
    debug_assert_eq!(registry.listener_count(), 0);
    Ok(ExitCode::SUCCESS)
}

/// Run an API call with the persisted session, saving it afterwards
fn with_api<F, Fut>(config: &AppConfig, call: F) -> Result<ExitCode>
where
    F: FnOnce(ApiClient) -> Fut,
    Fut: std::future::Future<Output = Result<()>>,
{
    let session_path = sqldraft::config_paths::session_file()
        .context("No config directory available for the session file")?;
    let session = SessionContext::load(&session_path);
    let client = ApiClient::new(&config.api, session.clone())?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let result = runtime.block_on(call(client));

    if let Some(to) = session.take_redirect() {
        eprintln!("Session expired, log in again (redirect to {})", to);
    }
    session
        .save(&session_path)
        .with_context(|| format!("Failed to save session to {}", session_path.display()))?;

    result.map(|()| ExitCode::SUCCESS)
}
