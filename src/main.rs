use chrono::Datelike;
use clap::Parser;
use college_showcase::{browse, cli, config, error, logging, render};
use college_showcase_common::{
    filter_entries, Department, DepartmentFilter, DepartmentStats, FacultyDirectory, MenuItem, Order,
};
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use error::{Result, ShowcaseError};
use serde::Serialize;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    // 設定ファイルが壊れていても設定不要のコマンドは動かす
    let config = if cli.command.uses_config() {
        Config::load()?
    } else {
        Config::default()
    };

    match cli.command {
        Commands::Faculty { query, department, interactive, format } => {
            let catalog = config.load_catalog(cli.data.as_deref())?;
            let category = department.unwrap_or(config.default_department);

            if interactive {
                println!("👩‍🏫 Faculty Directory\n");
                browse::run_interactive_browse(catalog.teachers, category)?;
                return Ok(());
            }

            let mut directory = FacultyDirectory::new(catalog.teachers);
            directory.set_category(category);
            directory.set_query(&query.unwrap_or_default());
            tracing::info!(
                query = directory.query(),
                category = category.label(),
                matched = directory.len(),
                "faculty search"
            );

            match format {
                OutputFormat::Json => print_json(directory.results())?,
                OutputFormat::Text => print!("{}", render::faculty_list(&directory)),
            }
        }

        Commands::Departments { name, query, semester, format } => {
            let catalog = config.load_catalog(cli.data.as_deref())?;

            match name {
                Some(name) => {
                    let department = Department::find(&catalog.departments, &name)
                        .ok_or_else(|| college_showcase_common::Error::NotFound(format!("department {}", name)))?;
                    let classes = match semester {
                        Some(s) => department.classes_for_semester(s),
                        None => department.classes.iter().collect(),
                    };
                    match format {
                        OutputFormat::Json => print_json(&classes)?,
                        OutputFormat::Text => print!("{}", render::department_detail(department, &classes)),
                    }
                }
                None => {
                    let query = query.unwrap_or_default();
                    let departments = filter_entries(&catalog.departments, &query, DepartmentFilter::All);
                    match format {
                        OutputFormat::Json => print_json(&departments)?,
                        OutputFormat::Text => {
                            println!("🏫 Departments\n");
                            print!("{}", render::department_list(&departments));
                        }
                    }
                }
            }
        }

        Commands::Stats { format } => {
            let stats = DepartmentStats::college_stats();
            match format {
                OutputFormat::Json => print_json(&stats)?,
                OutputFormat::Text => {
                    let year = chrono::Local::now().year();
                    print!("{}", render::stats(&stats, year));
                }
            }
        }

        Commands::Menu { item, quantity, query, format } => {
            let catalog = config.load_catalog(cli.data.as_deref())?;

            match item {
                Some(id) => {
                    let menu_item = MenuItem::find(&catalog.menu, id)
                        .ok_or_else(|| college_showcase_common::Error::NotFound(format!("menu item {}", id)))?;
                    let order = Order::new(menu_item.clone(), quantity);
                    if order.quantity() != quantity {
                        tracing::warn!(requested = quantity, applied = order.quantity(), "quantity clamped");
                    }
                    match format {
                        OutputFormat::Json => print_json(&serde_json::json!({
                            "item": order.item(),
                            "quantity": order.quantity(),
                            "total": order.total(),
                            "currency": config.currency,
                        }))?,
                        OutputFormat::Text => {
                            print!("{}", render::order_detail(&order, &config.currency));
                            println!("\n✔ {}", order.confirmation(&config.currency));
                        }
                    }
                }
                None => {
                    let query = query.unwrap_or_default();
                    let items = filter_entries(&catalog.menu, &query, DepartmentFilter::All);
                    match format {
                        OutputFormat::Json => print_json(&items)?,
                        OutputFormat::Text => {
                            println!("🍽 Canteen Menu\n");
                            print!("{}", render::menu_list(&items, &config.currency));
                        }
                    }
                }
            }
        }

        Commands::Config { set_default_department, set_data_path, set_currency, show } => {
            let mut config = config;

            if let Some(department) = set_default_department {
                config.set_default_department(department)?;
                println!("✔ 初期学科を設定しました: {}", department);
            }

            if let Some(path) = set_data_path {
                if !path.exists() {
                    return Err(ShowcaseError::FileNotFound(path.display().to_string()));
                }
                config.data_path = Some(path);
                config.save()?;
                println!("✔ カタログJSONを設定しました");
            }

            if let Some(currency) = set_currency {
                config.set_currency(&currency)?;
                println!("✔ 通貨表記を設定しました: {}", config.currency);
            }

            if show {
                println!("設定:");
                println!("  初期学科: {}", config.default_department);
                println!(
                    "  カタログ: {}",
                    config
                        .data_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "組み込みサンプル".into())
                );
                println!("  通貨表記: {}", config.currency);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
