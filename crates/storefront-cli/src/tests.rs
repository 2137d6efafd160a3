use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["storefront"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn products_defaults_to_featured_without_filters() {
    let cli = Cli::try_parse_from(["storefront", "products"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Products {
            category: None,
            search: None,
            sort: SortKey::Featured
        })
    ));
}

#[test]
fn products_with_filters_and_sort() {
    let cli = Cli::try_parse_from([
        "storefront",
        "products",
        "--category",
        "Textiel",
        "--search",
        "laken",
        "--sort",
        "price-low",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Products {
            category: Some(ref c),
            search: Some(ref s),
            sort: SortKey::PriceLow
        }) if c == "Textiel" && s == "laken"
    ));
}

#[test]
fn products_rejects_unknown_sort() {
    assert!(Cli::try_parse_from(["storefront", "products", "--sort", "cheapest"]).is_err());
}

#[test]
fn parses_cart_add() {
    let cli = Cli::try_parse_from(["storefront", "cart", "add", "p-1"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Cart {
            command: CartCommands::Add { ref id }
        }) if id == "p-1"
    ));
}

#[test]
fn cart_set_accepts_negative_quantity() {
    let cli = Cli::try_parse_from(["storefront", "cart", "set", "p-1", "-1"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Cart {
            command: CartCommands::Set { quantity: -1, .. }
        })
    ));
}

#[test]
fn parses_cart_clear() {
    let cli = Cli::try_parse_from(["storefront", "cart", "clear"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Cart {
            command: CartCommands::Clear
        })
    ));
}

fn checkout_args<'a>(extra: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec![
        "storefront",
        "checkout",
        "--first-name",
        "Anna",
        "--last-name",
        "de Vries",
        "--email",
        "anna@example.nl",
        "--phone",
        "0612345678",
        "--address",
        "Kerkstraat 1",
        "--postal-code",
        "1234 AB",
        "--city",
        "Amsterdam",
    ];
    args.extend_from_slice(extra);
    args
}

#[test]
fn checkout_defaults_country_payment_and_terms() {
    let cli = Cli::try_parse_from(checkout_args(&[])).unwrap();
    let Some(Commands::Checkout(args)) = cli.command else {
        panic!("expected checkout command");
    };
    assert_eq!(args.country, "Nederland");
    assert_eq!(args.payment, storefront_core::PaymentMethod::Ideal);
    assert!(!args.accept_terms);
}

#[test]
fn checkout_accepts_listed_country_only() {
    let cli = Cli::try_parse_from(checkout_args(&["--country", "België", "--accept-terms"]))
        .unwrap();
    let Some(Commands::Checkout(args)) = cli.command else {
        panic!("expected checkout command");
    };
    assert_eq!(args.country, "België");
    assert!(args.accept_terms);

    assert!(Cli::try_parse_from(checkout_args(&["--country", "Spanje"])).is_err());
}

#[test]
fn checkout_requires_contact_fields() {
    assert!(Cli::try_parse_from(["storefront", "checkout", "--accept-terms"]).is_err());
}
