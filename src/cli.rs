use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

use crate::adapters::navigator::HistoryNavigator;
use crate::application::{LoadOutcome, Notice, ProductEditor, SubmitOutcome};
use crate::config::{Settings, DEFAULT_CONFIG_FILE};
use crate::domain::{Product, ProductField, ProductId, ProductService};

/// Product editor - create, edit and list products on the shop backend
#[derive(Parser, Debug, Clone)]
#[command(name = "product-editor", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "PRODUCT_EDITOR_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Backend base URL, overrides `api.base_url`
    #[arg(long, env = "PRODUCT_EDITOR_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List all products
    List,
    /// Show one product
    Show { id: ProductId },
    /// Register a new product
    Create(FieldArgs),
    /// Change fields of an existing product
    Edit {
        id: ProductId,
        #[command(flatten)]
        fields: FieldArgs,
    },
}

/// Field values, taken as raw text like the form inputs
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct FieldArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub quantity: Option<String>,
}

impl FieldArgs {
    /// The given fields, in form order.
    pub fn changes(&self) -> Vec<(ProductField, &str)> {
        [
            (ProductField::Name, &self.name),
            (ProductField::Description, &self.description),
            (ProductField::Price, &self.price),
            (ProductField::Quantity, &self.quantity),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

impl Command {
    /// Runs the command against `service`, writing what the user sees to
    /// `out`. Returns `false` when the outcome was an error notice.
    pub async fn execute<S, W>(&self, service: &S, settings: &Settings, out: &mut W) -> anyhow::Result<bool>
    where
        S: ProductService + ?Sized,
        W: Write,
    {
        match self {
            Command::List => {
                let products = service.list().await?;
                if products.is_empty() {
                    writeln!(out, "No products")?;
                }
                for product in &products {
                    writeln!(
                        out,
                        "{}\t{}\t{:.2}\t{}",
                        product.id, product.draft.name, product.draft.price, product.draft.quantity
                    )?;
                }
                Ok(true)
            }
            Command::Show { id } => {
                let mut editor = ProductEditor::new(Some(*id));
                match editor.load(service).await {
                    LoadOutcome::Loaded(product) => {
                        write_product(out, &product)?;
                        Ok(true)
                    }
                    outcome => report(out, outcome.notice()),
                }
            }
            Command::Create(fields) => {
                let editor = ProductEditor::new(None);
                self.edit_and_submit(editor, fields, service, settings, out).await
            }
            Command::Edit { id, fields } => {
                let mut editor = ProductEditor::new(Some(*id));
                let outcome = editor.load(service).await;
                if outcome.notice().is_some() {
                    return report(out, outcome.notice());
                }
                self.edit_and_submit(editor, fields, service, settings, out).await
            }
        }
    }

    async fn edit_and_submit<S, W>(
        &self,
        editor: ProductEditor,
        fields: &FieldArgs,
        service: &S,
        settings: &Settings,
        out: &mut W,
    ) -> anyhow::Result<bool>
    where
        S: ProductService + ?Sized,
        W: Write,
    {
        let mut editor = editor.with_listing_path(settings.routes.listing_path.clone());
        for (field, value) in fields.changes() {
            editor.change_field(field, value)?;
        }

        let start = match editor.mode().id() {
            Some(id) => format!("/products/{}/edit", id),
            None => "/products/new".to_string(),
        };
        let mut navigator = HistoryNavigator::new(start);
        let outcome = editor.submit(service, &mut navigator).await;
        debug!(outcome = ?outcome, location = %navigator.current(), "Submission finished");

        if let SubmitOutcome::Saved { product, .. } = &outcome {
            write_product(out, product)?;
        }
        report(out, outcome.notice())
    }
}

fn write_product<W: Write>(out: &mut W, product: &Product) -> std::io::Result<()> {
    writeln!(out, "id:          {}", product.id)?;
    writeln!(out, "name:        {}", product.draft.name)?;
    writeln!(out, "description: {}", product.draft.description)?;
    writeln!(out, "price:       {:.2}", product.draft.price)?;
    writeln!(out, "quantity:    {}", product.draft.quantity)
}

fn report<W: Write>(out: &mut W, notice: Option<Notice>) -> anyhow::Result<bool> {
    match notice {
        Some(notice) => {
            writeln!(out, "{}", notice)?;
            Ok(!notice.is_error())
        }
        None => Ok(true),
    }
}
