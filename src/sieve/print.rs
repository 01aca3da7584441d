use colored::*;
use sieve::attributes::AttributeSpec;
use sieve::commands::{CmdMessage, MessageLevel};
use sieve::error::Result;
use sieve::model::Product;
use std::io::Write;

/// One line per product: `<name> is <size> and <color> `.
pub fn format_product(product: &Product) -> String {
    format!("{} is {} and {} ", product.name, product.size, product.color)
}

pub fn write_products<W: Write>(out: &mut W, products: &[&Product]) -> Result<()> {
    for product in products {
        writeln!(out, "{}", format_product(product))?;
    }
    Ok(())
}

pub fn write_products_json<W: Write>(out: &mut W, products: &[&Product]) -> Result<()> {
    let json = serde_json::to_string_pretty(products)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

pub fn write_attributes<W: Write>(out: &mut W, attributes: &[&AttributeSpec]) -> Result<()> {
    for attr in attributes {
        let values = match attr.allowed_values() {
            Some(values) => values.join(", "),
            None => "<any text>".to_string(),
        };
        writeln!(out, "{:<8}{:<28}{}", attr.name, attr.description, values)?;
    }
    Ok(())
}

/// Messages go to stderr so stdout only carries results.
pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => eprintln!("{}", message.content.dimmed()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}
