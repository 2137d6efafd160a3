//! Checkout form state and the order payload derived from it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartLine};
use crate::money::format_amount;
use crate::CoreError;

/// Country preselected on a fresh form.
pub const DEFAULT_COUNTRY: &str = "Nederland";

/// Countries the shop delivers to.
pub const COUNTRIES: [&str; 4] = ["Nederland", "België", "Duitsland", "Frankrijk"];

/// Payment method label passed through to the backend. No payment is taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Ideal,
    CreditCard,
    PayPal,
    BankTransfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Ideal,
        PaymentMethod::CreditCard,
        PaymentMethod::PayPal,
        PaymentMethod::BankTransfer,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Ideal => "ideal",
            PaymentMethod::CreditCard => "creditcard",
            PaymentMethod::PayPal => "paypal",
            PaymentMethod::BankTransfer => "banktransfer",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| CoreError::InvalidPaymentMethod(s.to_string()))
    }
}

/// The free-text fields of the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    PostalCode,
    City,
    Country,
}

impl FormField {
    /// Fields that must be non-blank before an order can be sent.
    pub const REQUIRED: [FormField; 7] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Email,
        FormField::Phone,
        FormField::Address,
        FormField::PostalCode,
        FormField::City,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Address => "address",
            FormField::PostalCode => "postalCode",
            FormField::City => "city",
            FormField::Country => "country",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s {
            "firstName" | "first-name" => FormField::FirstName,
            "lastName" | "last-name" => FormField::LastName,
            "email" => FormField::Email,
            "phone" => FormField::Phone,
            "address" => FormField::Address,
            "postalCode" | "postal-code" => FormField::PostalCode,
            "city" => FormField::City,
            "country" => FormField::Country,
            other => return Err(CoreError::UnknownFormField(other.to_string())),
        };
        Ok(field)
    }
}

/// Contact, shipping and payment details entered at checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
    pub payment_method: PaymentMethod,
    pub terms_accepted: bool,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            postal_code: String::new(),
            city: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
            payment_method: PaymentMethod::default(),
            terms_accepted: false,
        }
    }
}

impl OrderForm {
    #[must_use]
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Address => &self.address,
            FormField::PostalCode => &self.postal_code,
            FormField::City => &self.city,
            FormField::Country => &self.country,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Address => &mut self.address,
            FormField::PostalCode => &mut self.postal_code,
            FormField::City => &mut self.city,
            FormField::Country => &mut self.country,
        };
        *slot = value.into();
    }

    /// First required field that is blank, if any.
    #[must_use]
    pub fn first_missing_field(&self) -> Option<FormField> {
        FormField::REQUIRED
            .into_iter()
            .find(|f| self.field(*f).trim().is_empty())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Human-readable cart summary: `"2x Lamp, 1x Mug"`.
#[must_use]
pub fn cart_summary(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(|l| format!("{}x {}", l.quantity, l.product.title))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Body of `POST /order/create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub zip_code: String,
    pub city: String,
    pub country: String,
    pub payment_method: PaymentMethod,
    pub agrees_with_terms_and_privacy: bool,
    pub cart_items: String,
    pub order_total: String,
}

impl OrderSubmission {
    /// Flattens the cart and form into the wire payload.
    #[must_use]
    pub fn from_cart(cart: &Cart, form: &OrderForm) -> Self {
        Self {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            email: form.email.clone(),
            phone_number: form.phone.clone(),
            address: form.address.clone(),
            zip_code: form.postal_code.clone(),
            city: form.city.clone(),
            country: form.country.clone(),
            payment_method: form.payment_method,
            agrees_with_terms_and_privacy: form.terms_accepted,
            cart_items: cart_summary(cart.lines()),
            order_total: format_amount(cart.total()),
        }
    }
}
