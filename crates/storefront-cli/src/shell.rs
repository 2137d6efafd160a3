//! Interactive session driving a single storefront over stdin.
//!
//! Toasts and the success modal are rendered after each command for as long
//! as they are live; their timers keep running between prompts.

use std::str::FromStr;

use storefront_app::CatalogStatus;
use storefront_core::{format_price, CategoryFilter, FormField, PaymentMethod, SortKey, COUNTRIES};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::cart::print_cart;
use crate::catalog::{print_categories, print_products};
use crate::FileStorefront;

const HELP: &str = "\
commands:
  list                     show products for the current filters
  categories               show categories with product counts
  filter <category|all>    restrict the list to one category
  search [text]            filter by title or summary (empty clears)
  sort <key>               featured, newest, price-low or price-high
  add <id>                 add one unit to the cart
  qty <id> <n>             set a line's quantity (0 removes)
  rm <id>                  remove a line
  cart                     open the cart panel and show it
  hide                     close the cart panel
  dismiss                  close the added-to-cart notice
  checkout                 open the order form
  set <field> <value>      fill a form field (e.g. set first-name Anna)
  terms <on|off>           accept or decline the terms
  pay <method>             ideal, creditcard, paypal or banktransfer
  submit                   place the order
  cancel                   close the order form and clear it
  close                    close the order confirmation
  reload                   fetch the catalog again
  quit                     leave";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ShellCommand {
    Help,
    List,
    Categories,
    Filter(CategoryFilter),
    Search(String),
    Sort(SortKey),
    Add(String),
    Qty(String, i64),
    Remove(String),
    Cart,
    HideCart,
    Dismiss,
    Checkout,
    Set(FormField, String),
    Terms(bool),
    Pay(PaymentMethod),
    Submit,
    Cancel,
    Close,
    Reload,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let arg = |usage: &str| -> Result<String, String> {
            if rest.is_empty() {
                Err(format!("usage: {usage}"))
            } else {
                Ok(rest.to_string())
            }
        };

        let command = match verb {
            "help" | "?" => ShellCommand::Help,
            "list" | "ls" => ShellCommand::List,
            "categories" => ShellCommand::Categories,
            "filter" => {
                let Ok(filter) = arg("filter <category|all>")?.parse::<CategoryFilter>();
                ShellCommand::Filter(filter)
            }
            "search" => ShellCommand::Search(rest.to_string()),
            "sort" => ShellCommand::Sort(
                arg("sort <key>")?
                    .parse()
                    .map_err(|e: storefront_core::CoreError| e.to_string())?,
            ),
            "add" => ShellCommand::Add(arg("add <id>")?),
            "qty" => {
                let usage = "usage: qty <id> <n>";
                let (id, qty) = rest.split_once(char::is_whitespace).ok_or(usage)?;
                let qty = qty
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| format!("not a number: {}", qty.trim()))?;
                ShellCommand::Qty(id.to_string(), qty)
            }
            "rm" | "remove" => ShellCommand::Remove(arg("rm <id>")?),
            "cart" => ShellCommand::Cart,
            "hide" => ShellCommand::HideCart,
            "dismiss" => ShellCommand::Dismiss,
            "checkout" => ShellCommand::Checkout,
            "set" => {
                let usage = "usage: set <field> <value>";
                let (field, value) = rest.split_once(char::is_whitespace).ok_or(usage)?;
                let field = field.parse::<FormField>().map_err(|e| e.to_string())?;
                ShellCommand::Set(field, value.trim().to_string())
            }
            "terms" => match rest {
                "on" | "yes" => ShellCommand::Terms(true),
                "off" | "no" => ShellCommand::Terms(false),
                _ => return Err("usage: terms <on|off>".to_string()),
            },
            "pay" => ShellCommand::Pay(
                arg("pay <method>")?
                    .parse()
                    .map_err(|e: storefront_core::CoreError| e.to_string())?,
            ),
            "submit" => ShellCommand::Submit,
            "cancel" => ShellCommand::Cancel,
            "close" => ShellCommand::Close,
            "reload" => ShellCommand::Reload,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            other => return Err(format!("unknown command: {other} (try `help`)")),
        };
        Ok(command)
    }
}

/// Run the interactive loop until `quit` or end of input.
///
/// # Errors
///
/// Returns an error only if stdin or stdout fail; command failures are
/// printed and the loop continues.
pub(crate) async fn run_shell(store: &mut FileStorefront) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    reload(store).await;
    println!("type `help` for commands");

    loop {
        stdout.write_all(prompt(store).as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            render_signals(store);
            continue;
        }

        match line.parse::<ShellCommand>() {
            Ok(ShellCommand::Quit) => break,
            Ok(command) => execute(store, command).await,
            Err(message) => println!("{message}"),
        }
        render_signals(store);
    }

    Ok(())
}

async fn execute(store: &mut FileStorefront, command: ShellCommand) {
    match command {
        ShellCommand::Help => println!("{HELP}"),
        ShellCommand::List => list(store),
        ShellCommand::Categories => print_categories(store),
        ShellCommand::Filter(filter) => {
            store.catalog_mut().set_category(filter);
            list(store);
        }
        ShellCommand::Search(text) => {
            store.catalog_mut().set_search(text);
            list(store);
        }
        ShellCommand::Sort(key) => {
            store.catalog_mut().set_sort(key);
            list(store);
        }
        ShellCommand::Add(id) => {
            if let Err(e) = store.add_to_cart(&id) {
                println!("{e}");
            }
        }
        ShellCommand::Qty(id, qty) => {
            store.set_quantity(&id, qty);
            print_cart(store.cart().cart());
        }
        ShellCommand::Remove(id) => {
            store.remove_from_cart(&id);
            print_cart(store.cart().cart());
        }
        ShellCommand::Cart => {
            store.ui_mut().open_cart();
            print_cart(store.cart().cart());
        }
        ShellCommand::HideCart => store.ui_mut().close_cart(),
        ShellCommand::Dismiss => store.ui_mut().dismiss_added(),
        ShellCommand::Checkout => match store.begin_checkout() {
            Ok(()) => print_form(store),
            Err(e) => println!("{e}"),
        },
        ShellCommand::Set(field, value) => {
            if require_checkout(store) {
                if field == FormField::Country && !COUNTRIES.contains(&value.as_str()) {
                    println!("country must be one of: {}", COUNTRIES.join(", "));
                } else {
                    store.form_mut().set_field(field, value);
                }
            }
        }
        ShellCommand::Terms(accepted) => {
            if require_checkout(store) {
                store.form_mut().terms_accepted = accepted;
            }
        }
        ShellCommand::Pay(method) => {
            if require_checkout(store) {
                store.form_mut().payment_method = method;
            }
        }
        ShellCommand::Submit => {
            if require_checkout(store) {
                println!("placing order...");
                if let Err(e) = store.submit_order().await {
                    println!("{e}");
                }
            }
        }
        ShellCommand::Cancel => {
            store.cancel_checkout();
            println!("checkout cancelled");
        }
        ShellCommand::Close => store.ui_mut().close_success(),
        ShellCommand::Reload => reload(store).await,
        ShellCommand::Quit => {}
    }
}

async fn reload(store: &mut FileStorefront) {
    println!("loading products...");
    match store.load_catalog().await {
        Ok(count) => println!("{count} products loaded"),
        Err(_) => {
            if let CatalogStatus::Failed(message) = store.catalog().status() {
                println!("{message}");
            }
            println!("type `reload` to try again");
        }
    }
}

fn list(store: &FileStorefront) {
    match store.catalog().status() {
        CatalogStatus::Loading => println!("loading products..."),
        CatalogStatus::Failed(message) => println!("{message} (type `reload` to try again)"),
        CatalogStatus::Ready => {
            let query = store.catalog().query();
            println!(
                "category: {}  sort: {}  search: {:?}",
                query.category, query.sort, query.search
            );
            print_products(store.catalog().view());
        }
    }
}

fn require_checkout(store: &FileStorefront) -> bool {
    let open = store.ui().views().checkout_open;
    if !open {
        println!("open the order form first with `checkout`");
    }
    open
}

fn print_form(store: &FileStorefront) {
    let form = store.form();
    println!("order form (total {})", format_price(Some(store.cart().total())));
    for field in FormField::REQUIRED {
        let value = form.field(field);
        println!("  {:<12}{}", field.name(), if value.is_empty() { "-" } else { value });
    }
    println!("  {:<12}{}", FormField::Country.name(), form.country);
    println!("  {:<12}{}", "payment", form.payment_method);
    println!("  {:<12}{}", "terms", if form.terms_accepted { "accepted" } else { "not accepted" });
}

fn render_signals(store: &FileStorefront) {
    if let Some(added) = store.ui().added() {
        println!("+ {} added to cart ({} in cart)", added.title, added.quantity);
        println!("  (type `dismiss` to hide)");
    }
    if let Some(confirmation) = store.ui().success() {
        println!("order {} placed. thank you!", confirmation.order_number);
        println!("  items: {}", confirmation.cart_items);
        println!("  a confirmation will be sent to {}", confirmation.email);
        println!("  (type `close` to dismiss)");
    }
}

fn prompt(store: &FileStorefront) -> String {
    let badge = store.cart().cart().item_count();
    let views = store.ui().views();
    if views.checkout_open {
        format!("checkout [{badge}] > ")
    } else if views.cart_open {
        format!("cart [{badge}] > ")
    } else {
        format!("shop [{badge}] > ")
    }
}
