use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use uuid::Uuid;

use fiado_core::{
    core::services::{ClientService, SupplierService, TransactionService},
    currency::{self, CurrencyConfig, CURRENCIES},
    engine::{
        clients_balance, group_clients_by_supplier, monthly_series, supplier_summaries,
        SupplierFilter,
    },
    ledger::{Book, TransactionKind},
    storage::{JsonStorage, StorageBackend},
};

const UNKNOWN_SUPPLIER_LABEL: &str = "Proveedor desconocido";

#[derive(Parser)]
#[command(
    name = "fiado_core_cli",
    about = "Supplier/client credit ledger",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Global totals, supplier standing, and monthly analysis.
    Dashboard {
        /// Restrict the monthly analysis to one supplier.
        #[arg(long)]
        supplier: Option<String>,
    },
    /// Supplier management.
    #[command(subcommand)]
    Supplier(SupplierCmd),
    /// Client listing and management.
    #[command(subcommand)]
    Client(ClientCmd),
    /// Record a sale or payment against a client.
    Record {
        client: String,
        #[arg(value_enum)]
        kind: KindArg,
        amount: String,
        #[arg(long)]
        note: Option<String>,
    },
    /// Show or change the currency configuration.
    Currency {
        /// Switch to another currency code (e.g. DOP, USD).
        #[arg(long)]
        set: Option<String>,
        /// Toggle decimal display on or off.
        #[arg(long)]
        decimals: Option<bool>,
    },
}

#[derive(Subcommand)]
enum SupplierCmd {
    List,
    Add {
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    Edit {
        name: String,
        #[arg(long)]
        new_name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    Remove {
        name: String,
    },
}

#[derive(Subcommand)]
enum ClientCmd {
    List {
        /// Case-insensitive substring filter on client names.
        #[arg(long)]
        filter: Option<String>,
    },
    Add {
        name: String,
        #[arg(long)]
        supplier: String,
    },
    Edit {
        name: String,
        #[arg(long)]
        new_name: Option<String>,
        #[arg(long)]
        supplier: Option<String>,
    },
    Remove {
        name: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Sale,
    Payment,
}

impl From<KindArg> for TransactionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Sale => TransactionKind::Sale,
            KindArg::Payment => TransactionKind::Payment,
        }
    }
}

fn main() {
    fiado_core::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let storage = JsonStorage::new_default()?;
    let mut book = storage.load()?;
    let config = storage.load_currency()?;

    match cli.command {
        Command::Dashboard { supplier } => render_dashboard(&book, &config, supplier.as_deref()),
        Command::Supplier(cmd) => run_supplier(cmd, &mut book, &storage),
        Command::Client(cmd) => run_client(cmd, &mut book, &config, &storage),
        Command::Record {
            client,
            kind,
            amount,
            note,
        } => {
            let client_id = resolve_client(&book, &client)?;
            TransactionService::record_from_input(
                &mut book,
                client_id,
                kind.into(),
                &amount,
                chrono::Utc::now(),
                note.as_deref(),
            )?;
            storage.save(&book)?;
            println!("Movimiento registrado para {}", client.bold());
            Ok(())
        }
        Command::Currency { set, decimals } => run_currency(set, decimals, config, &storage),
    }
}

fn render_dashboard(
    book: &Book,
    config: &CurrencyConfig,
    supplier: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let totals = clients_balance(&book.clients);
    println!("{}", "Resumen".bold());
    println!(
        "  Total vendido:   {}",
        currency::format_amount(totals.sold, config).blue()
    );
    println!(
        "  Total cobrado:   {}",
        currency::format_amount(totals.paid, config).green()
    );
    println!(
        "  Pendiente global: {}",
        currency::format_amount(totals.pending(), config).yellow()
    );
    println!(
        "  Proveedores: {}   Clientes: {}",
        book.suppliers.len(),
        book.clients.len()
    );

    println!("\n{}", "Estado por proveedor".bold());
    let summaries = supplier_summaries(&book.suppliers, &book.clients);
    if summaries.is_empty() {
        println!("  (no hay proveedores registrados)");
    }
    for summary in &summaries {
        println!(
            "  {:<24} por cobrar {:>14}  cobrado {:>14}",
            summary.supplier.name,
            currency::format_amount(summary.balance.pending(), config).yellow(),
            currency::format_amount(summary.balance.paid, config).green(),
        );
    }

    let filter = match supplier {
        Some(name) => SupplierFilter::One(resolve_supplier(book, name)?),
        None => SupplierFilter::All,
    };
    println!("\n{}", "Análisis mensual".bold());
    let series = monthly_series(&book.clients, filter);
    if series.is_empty() {
        println!("  (sin movimientos)");
    }
    for bucket in &series {
        println!(
            "  {} {}  ventas {:>14}  cobros {:>14}",
            currency::short_month_label(bucket.key.month, config).to_uppercase(),
            bucket.key.year,
            currency::format_amount(bucket.sold, config),
            currency::format_amount(bucket.paid, config),
        );
    }
    Ok(())
}

fn run_supplier(
    cmd: SupplierCmd,
    book: &mut Book,
    storage: &JsonStorage,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        SupplierCmd::List => {
            for supplier in SupplierService::list(book) {
                match &supplier.description {
                    Some(description) => {
                        println!("{}  {}", supplier.name.bold(), description.dimmed())
                    }
                    None => println!("{}", supplier.name.bold()),
                }
            }
            Ok(())
        }
        SupplierCmd::Add { name, description } => {
            SupplierService::add(book, &name, description.as_deref())?;
            storage.save(book)?;
            println!("Proveedor {} creado", name.bold());
            Ok(())
        }
        SupplierCmd::Edit {
            name,
            new_name,
            description,
        } => {
            let id = resolve_supplier(book, &name)?;
            let current = book.supplier(id).map(|s| s.name.clone()).unwrap_or(name);
            let next_name = new_name.unwrap_or(current);
            SupplierService::edit(book, id, &next_name, description.as_deref())?;
            storage.save(book)?;
            println!("Proveedor {} actualizado", next_name.bold());
            Ok(())
        }
        SupplierCmd::Remove { name } => {
            let id = resolve_supplier(book, &name)?;
            SupplierService::remove(book, id)?;
            storage.save(book)?;
            println!("Proveedor {} eliminado", name.bold());
            Ok(())
        }
    }
}

fn run_client(
    cmd: ClientCmd,
    book: &mut Book,
    config: &CurrencyConfig,
    storage: &JsonStorage,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ClientCmd::List { filter } => {
            let groups = group_clients_by_supplier(
                &book.clients,
                &book.suppliers,
                filter.as_deref().unwrap_or(""),
            );
            if groups.is_empty() {
                println!("No hay clientes registrados");
            }
            for group in &groups {
                let label = group
                    .supplier
                    .map(|s| s.name.as_str())
                    .unwrap_or(UNKNOWN_SUPPLIER_LABEL);
                println!(
                    "{}  deuda total {}",
                    label.bold(),
                    currency::format_amount(group.total_pending, config).yellow()
                );
                for client in &group.clients {
                    let balance = fiado_core::engine::client_balance(client);
                    let pending = balance.pending();
                    let standing = if pending > rust_decimal::Decimal::ZERO {
                        format!("debe {}", currency::format_amount(pending, config))
                            .yellow()
                            .to_string()
                    } else {
                        format!("saldo {}", currency::format_amount(pending.abs(), config))
                            .green()
                            .to_string()
                    };
                    println!(
                        "    {:<20} {}  crédito total {}",
                        client.name,
                        standing,
                        currency::format_amount(balance.sold, config)
                    );
                }
            }
            Ok(())
        }
        ClientCmd::Add { name, supplier } => {
            let supplier_id = resolve_supplier(book, &supplier)?;
            ClientService::add(book, &name, supplier_id)?;
            storage.save(book)?;
            println!("Cliente {} creado", name.bold());
            Ok(())
        }
        ClientCmd::Edit {
            name,
            new_name,
            supplier,
        } => {
            let id = resolve_client(book, &name)?;
            let supplier_id = match supplier {
                Some(supplier) => resolve_supplier(book, &supplier)?,
                None => book.client(id).map(|c| c.supplier_id).unwrap_or_default(),
            };
            let next_name = new_name.unwrap_or(name);
            ClientService::edit(book, id, &next_name, supplier_id)?;
            storage.save(book)?;
            println!("Cliente {} actualizado", next_name.bold());
            Ok(())
        }
        ClientCmd::Remove { name } => {
            let id = resolve_client(book, &name)?;
            ClientService::remove(book, id)?;
            storage.save(book)?;
            println!("Cliente {} eliminado", name.bold());
            Ok(())
        }
    }
}

fn run_currency(
    set: Option<String>,
    decimals: Option<bool>,
    mut config: CurrencyConfig,
    storage: &JsonStorage,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut changed = false;
    if let Some(code) = set {
        let code = code.to_uppercase();
        if currency::currency_info(&code).is_none() {
            let known: Vec<&str> = CURRENCIES.iter().map(|info| info.code).collect();
            return Err(format!(
                "unsupported currency `{}` (known: {})",
                code,
                known.join(", ")
            )
            .into());
        }
        config.select(&code);
        changed = true;
    }
    if let Some(show) = decimals {
        config.show_decimals = show;
        changed = true;
    }
    if changed {
        storage.save_currency(&config)?;
    }
    let preview = currency::format_amount(rust_decimal::Decimal::new(1234567, 2), &config);
    println!(
        "{} ({})  decimales: {}  ej. {}",
        config.code.as_str().bold(),
        config.locale,
        if config.show_decimals { "sí" } else { "no" },
        preview
    );
    Ok(())
}

fn resolve_supplier(book: &Book, name: &str) -> Result<Uuid, String> {
    book.suppliers
        .iter()
        .find(|supplier| supplier.name.eq_ignore_ascii_case(name.trim()))
        .map(|supplier| supplier.id)
        .ok_or_else(|| format!("supplier `{}` not found", name))
}

fn resolve_client(book: &Book, name: &str) -> Result<Uuid, String> {
    book.clients
        .iter()
        .find(|client| client.name.eq_ignore_ascii_case(name.trim()))
        .map(|client| client.id)
        .ok_or_else(|| format!("client `{}` not found", name))
}
