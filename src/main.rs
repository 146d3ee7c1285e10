use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;

use docket::api::DocketApi;
use docket::clipboard::copy_to_clipboard;
use docket::commands::list::ListFilter;
use docket::commands::reference::ReferenceFields;
use docket::config::DocketConfig;
use docket::error::{DocketError, Result};
use docket::fields::FieldEdit;
use docket::index::CaseSelector;
use docket::model::Case;
use docket::persist::{FileStore, StateStore, ViewState};
use docket::report::{report_filename, RefColumn};
use docket::store::DropSlot;

mod args;
mod render;

use args::{Cli, Commands, DiaryAction, RefAction, TaskAction};
use render::print_messages;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: DocketApi<FileStore>,
    root: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // init must not touch the resolved data dir; it creates a local one.
    if matches!(cli.command, Some(Commands::Init)) {
        return handle_init();
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::New { title, number }) => handle_new(&mut ctx, title, number),
        Some(Commands::List {
            archived,
            post_live,
            all,
        }) => {
            let filter = if all {
                ListFilter::All
            } else if archived {
                ListFilter::Archived
            } else if post_live {
                ListFilter::PostLive
            } else {
                ListFilter::Current
            };
            handle_list(&mut ctx, filter)
        }
        Some(Commands::Open { case }) => handle_open(&mut ctx, case),
        Some(Commands::View { case }) => handle_view(&mut ctx, case),
        Some(Commands::Set { field, value, case }) => handle_set(&mut ctx, &field, &value, case),
        Some(Commands::Status { label, case }) => handle_set(&mut ctx, "status", &label, case),
        Some(Commands::Fav { case }) => handle_fav(&mut ctx, case),
        Some(Commands::Archive { case, yes }) => handle_archive(&mut ctx, case, yes),
        Some(Commands::Unarchive { case }) => handle_unarchive(&mut ctx, case),
        Some(Commands::Postlive { case }) => handle_post_live(&mut ctx, case, true),
        Some(Commands::Unpostlive { case }) => handle_post_live(&mut ctx, case, false),
        Some(Commands::Delete { case, yes }) => handle_delete(&mut ctx, case, yes),
        Some(Commands::Reorder {
            case,
            before,
            after,
        }) => handle_reorder(&mut ctx, case, before, after),
        Some(Commands::Diary { action }) => handle_diary(&mut ctx, action),
        Some(Commands::Task { action }) => handle_task(&mut ctx, action),
        Some(Commands::Ref { action }) => handle_ref(&mut ctx, action),
        Some(Commands::Tag { tag }) => handle_tag(&mut ctx, &tag, true),
        Some(Commands::Untag { tag }) => handle_tag(&mut ctx, &tag, false),
        Some(Commands::Tasks) => handle_tasks(&mut ctx),
        Some(Commands::Search { query }) => handle_search(&mut ctx, &query),
        Some(Commands::Statuses) => {
            render::print_statuses();
            Ok(())
        }
        Some(Commands::Copy { case }) => handle_copy(&mut ctx, case),
        Some(Commands::Export { path }) => handle_export(&mut ctx, path),
        Some(Commands::Import { path }) => handle_import(&mut ctx, path),
        Some(Commands::Init) => unreachable!("handled above"),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&mut ctx, ListFilter::Current),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let root = resolve_root(cli.dir.clone())?;
    if cli.verbose {
        eprintln!("data dir: {}", root.display());
    }
    let api = DocketApi::open(FileStore::new(root.clone()))?;
    Ok(AppContext { api, root })
}

/// Data dir resolution, first match wins: --dir, DOCKET_HOME, a .docket/
/// next to the working directory, the platform data dir.
fn resolve_root(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Ok(home) = std::env::var("DOCKET_HOME") {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project_dir = cwd.join(".docket");
    if project_dir.is_dir() {
        return Ok(project_dir);
    }
    let proj_dirs = ProjectDirs::from("com", "docket", "docket")
        .ok_or_else(|| DocketError::Api("Could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn selector_of(case: Option<String>) -> Result<Option<CaseSelector>> {
    case.map(|s| s.parse::<CaseSelector>()).transpose()
}

fn ask(question: &str) -> bool {
    use std::io::{self, Write};
    print!("{} [y/N] ", question);
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
}

fn handle_new(ctx: &mut AppContext, title: Option<String>, number: Option<String>) -> Result<()> {
    let result = ctx.api.create_case(title, number)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, filter: ListFilter) -> Result<()> {
    let result = ctx.api.list(filter)?;
    render::print_cases(&result.listed_cases, ctx.api.store().active_id());
    print_messages(&result.messages);
    Ok(())
}

fn handle_open(ctx: &mut AppContext, case: String) -> Result<()> {
    let selector = case.parse::<CaseSelector>()?;
    let result = ctx.api.open_case(&selector)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, case: Option<String>) -> Result<()> {
    let selector = selector_of(case)?;
    let result = ctx.api.view_case(selector.as_ref())?;
    if let Some(dc) = result.listed_cases.first() {
        render::print_case_detail(dc);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_set(ctx: &mut AppContext, field: &str, value: &str, case: Option<String>) -> Result<()> {
    let edit = FieldEdit::parse(field, value)?;
    let selector = selector_of(case)?;
    let result = ctx.api.update_case(selector.as_ref(), &[edit])?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_fav(ctx: &mut AppContext, case: Option<String>) -> Result<()> {
    let selector = selector_of(case)?;
    let result = ctx.api.toggle_favorite(selector.as_ref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_archive(ctx: &mut AppContext, case: Option<String>, yes: bool) -> Result<()> {
    let selector = selector_of(case)?;
    let mut confirm =
        |case: &Case| yes || ask(&format!("Archive case {}?", case.tab_label()));
    let result = ctx.api.archive_case(selector.as_ref(), &mut confirm)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_unarchive(ctx: &mut AppContext, case: String) -> Result<()> {
    let selector = case.parse::<CaseSelector>()?;
    let result = ctx.api.unarchive_case(&selector)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_post_live(ctx: &mut AppContext, case: Option<String>, value: bool) -> Result<()> {
    let selector = selector_of(case)?;
    let result = ctx.api.set_post_live(selector.as_ref(), value)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, case: String, yes: bool) -> Result<()> {
    let selector = case.parse::<CaseSelector>()?;
    let mut confirm =
        |case: &Case| yes || ask(&format!("Permanently delete case {}?", case.tab_label()));
    let result = ctx.api.delete_case(&selector, &mut confirm)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_reorder(
    ctx: &mut AppContext,
    case: String,
    before: Option<String>,
    after: Option<String>,
) -> Result<()> {
    let dragged = case.parse::<CaseSelector>()?;
    let (target, slot) = match (before, after) {
        (Some(target), None) => (target.parse::<CaseSelector>()?, DropSlot::Before),
        (None, Some(target)) => (target.parse::<CaseSelector>()?, DropSlot::After),
        _ => {
            return Err(DocketError::Api(
                "Give --before or --after".to_string(),
            ))
        }
    };
    let result = ctx.api.reorder_case(&dragged, &target, slot)?;
    render::print_cases(&result.listed_cases, ctx.api.store().active_id());
    print_messages(&result.messages);
    Ok(())
}

fn handle_diary(ctx: &mut AppContext, action: DiaryAction) -> Result<()> {
    let result = match action {
        DiaryAction::Add { text } => ctx.api.add_diary_entry(None, &text)?,
        DiaryAction::Edit { position, text } => ctx.api.edit_diary_entry(None, position, &text)?,
        DiaryAction::Rm { position } => ctx.api.remove_diary_entry(None, position)?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_task(ctx: &mut AppContext, action: TaskAction) -> Result<()> {
    let result = match action {
        TaskAction::Add { text } => ctx.api.add_task(None, &text)?,
        TaskAction::Done { position } => ctx.api.set_task_done(None, position, true)?,
        TaskAction::Undo { position } => ctx.api.set_task_done(None, position, false)?,
        TaskAction::Edit { position, text } => ctx.api.edit_task(None, position, &text)?,
        TaskAction::Rm { position } => ctx.api.remove_task(None, position)?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_ref(ctx: &mut AppContext, action: RefAction) -> Result<()> {
    let result = match action {
        RefAction::Add {
            name,
            url,
            profile,
            collection,
            product_id,
        } => {
            let fields = ReferenceFields {
                name: None,
                url,
                profile,
                collection,
                product_id,
            };
            ctx.api.add_reference(None, &name, &fields)?
        }
        RefAction::Edit {
            position,
            name,
            url,
            profile,
            collection,
            product_id,
        } => {
            let fields = ReferenceFields {
                name,
                url,
                profile,
                collection,
                product_id,
            };
            ctx.api.edit_reference(None, position, &fields)?
        }
        RefAction::Rm { position } => ctx.api.remove_reference(None, position)?,
        RefAction::Report { columns, output } => return handle_ref_report(ctx, columns, output),
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_ref_report(
    ctx: &mut AppContext,
    columns: Option<String>,
    output: Option<Option<PathBuf>>,
) -> Result<()> {
    let columns = match columns {
        Some(list) => RefColumn::parse_list(&list)?,
        None => DocketConfig::load(&ctx.root)?.report_columns()?,
    };
    let path = match output {
        None => None,
        Some(Some(path)) => Some(path),
        Some(None) => {
            let case = ctx.api.store().active().ok_or_else(|| {
                DocketError::Api("No case selected. Select one with 'docket open'.".to_string())
            })?;
            Some(PathBuf::from(report_filename(case)))
        }
    };
    let result = ctx.api.reference_report(None, &columns, path.as_deref())?;
    if let Some(text) = &result.report {
        println!("{}", text);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_tag(ctx: &mut AppContext, tag: &str, add: bool) -> Result<()> {
    let result = if add {
        ctx.api.add_tag(None, tag)?
    } else {
        ctx.api.remove_tag(None, tag)?
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_tasks(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.pending_tasks()?;
    render::print_tasks(&result.tasks, &result.listed_cases);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, query: &str) -> Result<()> {
    let result = ctx.api.search(query)?;
    render::print_search(&result.listed_cases, query);
    print_messages(&result.messages);
    Ok(())
}

fn handle_copy(ctx: &mut AppContext, case: Option<String>) -> Result<()> {
    let selector = selector_of(case)?;
    let result = ctx.api.view_case(selector.as_ref())?;
    let Some(dc) = result.listed_cases.first() else {
        print_messages(&result.messages);
        return Ok(());
    };
    let text = dc.case.tab_label().to_string();
    match copy_to_clipboard(&text) {
        Ok(()) => println!("Copied {} to clipboard.", text),
        Err(e) => eprintln!("Warning: Failed to copy to clipboard: {}", e),
    }
    Ok(())
}

fn handle_export(ctx: &mut AppContext, path: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export(path.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.import(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(
    ctx: &mut AppContext,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let mut config = DocketConfig::load(&ctx.root)?;
    match (key.as_deref(), value) {
        (None, _) => {
            println!(
                "report-columns = {}",
                config.get("report-columns").unwrap_or_default()
            );
        }
        (Some(key), None) => match config.get(key) {
            Some(value) => println!("{} = {}", key, value),
            None => println!("Unknown config key: {}", key),
        },
        (Some(key), Some(value)) => {
            config.set(key, &value)?;
            config.save(&ctx.root)?;
            println!("{} = {}", key, config.get(key).unwrap_or_default());
        }
    }
    Ok(())
}

fn handle_init() -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let root = cwd.join(".docket");
    let mut store = FileStore::new(root.clone());
    if store.cases_path().exists() {
        println!("Already initialized: {}", store.cases_path().display());
        return Ok(());
    }
    store.save(&[], &ViewState::default())?;
    println!("Initialized empty docket store in {}", root.display());
    Ok(())
}
