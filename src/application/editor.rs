//! Product editor
//!
//! Headless state behind the product create/edit form. It owns the draft,
//! tracks whether a load or a save is outstanding and turns every user
//! action into a typed outcome. Rendering those outcomes is left to the
//! front end.
//!
//! Each remote operation comes in two shapes:
//! - `begin_*` / `complete_*` for event-loop front ends that own the
//!   in-flight future themselves (the Leptos form);
//! - [`ProductEditor::load`] and [`ProductEditor::submit`], which await the
//!   service in one call.

use std::fmt;
use tracing::{debug, info, warn};

use crate::domain::{
    InputError, InvalidProductId, Navigator, Product, ProductDraft, ProductField, ProductId,
    ProductService, ServiceError, ValidationError,
};

/// Path of the listing view the form returns to after saving.
pub const DEFAULT_LISTING_PATH: &str = "/";

/// Whether the form creates a new product or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(ProductId),
}

impl EditorMode {
    pub fn from_id(id: Option<ProductId>) -> Self {
        id.map_or(EditorMode::Create, EditorMode::Edit)
    }

    pub fn id(self) -> Option<ProductId> {
        match self {
            EditorMode::Create => None,
            EditorMode::Edit(id) => Some(id),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            EditorMode::Create => "New Product",
            EditorMode::Edit(_) => "Edit Product",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            EditorMode::Create => "Register",
            EditorMode::Edit(_) => "Update",
        }
    }
}

/// What a successful save did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAction {
    Created,
    Updated,
}

/// Busy state of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorPhase {
    #[default]
    Idle,
    /// `pending` loads have been started and not completed yet
    Loading { pending: usize },
    Submitting(SaveAction),
}

/// User-facing message, one per outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NotFound,
    Invalid(ValidationError),
    Created,
    Updated,
    SaveFailed,
}

impl Notice {
    pub fn is_error(self) -> bool {
        matches!(self, Notice::NotFound | Notice::Invalid(_) | Notice::SaveFailed)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NotFound => f.write_str("Product not found"),
            Notice::Invalid(reason) => write!(f, "{}", reason),
            Notice::Created => f.write_str("Product created successfully"),
            Notice::Updated => f.write_str("Product updated successfully"),
            Notice::SaveFailed => f.write_str("Error saving product"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The draft now holds this product's fields
    Loaded(Product),
    /// The product could not be fetched; the draft is unchanged
    Failed(ServiceError),
    /// Create mode, nothing to fetch or apply
    Skipped,
    /// A save is in flight
    Busy,
}

impl LoadOutcome {
    pub fn notice(&self) -> Option<Notice> {
        match self {
            LoadOutcome::Failed(_) => Some(Notice::NotFound),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Rejected(ValidationError),
    Saved {
        action: SaveAction,
        product: Product,
        navigate_to: String,
    },
    /// The service call failed; the draft is preserved for a retry
    Failed(ServiceError),
    /// A load or another save is in flight; nothing was sent
    Busy,
}

impl SubmitOutcome {
    pub fn notice(&self) -> Option<Notice> {
        match self {
            SubmitOutcome::Rejected(reason) => Some(Notice::Invalid(*reason)),
            SubmitOutcome::Saved { action: SaveAction::Created, .. } => Some(Notice::Created),
            SubmitOutcome::Saved { action: SaveAction::Updated, .. } => Some(Notice::Updated),
            SubmitOutcome::Failed(_) => Some(Notice::SaveFailed),
            SubmitOutcome::Busy => None,
        }
    }
}

/// Remote call a validated submission has to make.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitRequest {
    Create(ProductDraft),
    Update(ProductId, ProductDraft),
}

impl SubmitRequest {
    pub async fn dispatch<S>(&self, service: &S) -> Result<Product, ServiceError>
    where
        S: ProductService + ?Sized,
    {
        match self {
            SubmitRequest::Create(draft) => service.create(draft).await,
            SubmitRequest::Update(id, draft) => service.update(*id, draft).await,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProductEditor {
    mode: EditorMode,
    draft: ProductDraft,
    phase: EditorPhase,
    listing_path: String,
}

impl ProductEditor {
    pub fn new(id: Option<ProductId>) -> Self {
        Self {
            mode: EditorMode::from_id(id),
            draft: ProductDraft::default(),
            phase: EditorPhase::Idle,
            listing_path: DEFAULT_LISTING_PATH.to_string(),
        }
    }

    /// Builds an editor from the optional `:id` route segment.
    pub fn for_route(raw_id: Option<&str>) -> Result<Self, InvalidProductId> {
        let id = raw_id.map(str::parse::<ProductId>).transpose()?;
        Ok(Self::new(id))
    }

    pub fn with_listing_path(mut self, path: impl Into<String>) -> Self {
        self.listing_path = path.into();
        self
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    pub fn listing_path(&self) -> &str {
        &self.listing_path
    }

    /// True while inputs and actions should be disabled.
    pub fn is_busy(&self) -> bool {
        self.phase != EditorPhase::Idle
    }

    /// Points the editor at another route identifier.
    ///
    /// Returns the identifier to load when one has to be fetched. Leaving
    /// edit mode resets the draft; switching to another product keeps the
    /// current draft until that product's load completes.
    pub fn retarget(&mut self, id: Option<ProductId>) -> Option<ProductId> {
        let mode = EditorMode::from_id(id);
        if mode == self.mode {
            return None;
        }
        debug!(from = ?self.mode, to = ?mode, "Retargeting product editor");
        self.mode = mode;
        if mode == EditorMode::Create {
            self.draft = ProductDraft::default();
        }
        id
    }

    /// Applies one input change to the draft.
    pub fn change_field(&mut self, field: ProductField, input: &str) -> Result<(), InputError> {
        if self.is_busy() {
            return Err(InputError::Busy);
        }
        self.draft = self.draft.with_field(field, input)?;
        Ok(())
    }

    /// Same as [`change_field`](Self::change_field) with the input's `name`
    /// attribute instead of a typed field.
    pub fn change_named_field(&mut self, name: &str, input: &str) -> Result<(), InputError> {
        let field = name.parse::<ProductField>()?;
        self.change_field(field, input)
    }

    /// Starts loading the product being edited.
    ///
    /// A load may start while another is pending (the identifier changed);
    /// whichever completes last wins.
    pub fn begin_load(&mut self) -> Result<ProductId, LoadOutcome> {
        let id = match self.mode {
            EditorMode::Create => return Err(LoadOutcome::Skipped),
            EditorMode::Edit(id) => id,
        };
        self.phase = match self.phase {
            EditorPhase::Idle => EditorPhase::Loading { pending: 1 },
            EditorPhase::Loading { pending } => EditorPhase::Loading { pending: pending + 1 },
            EditorPhase::Submitting(_) => return Err(LoadOutcome::Busy),
        };
        debug!(product_id = %id, "Loading product");
        Ok(id)
    }

    pub fn complete_load(&mut self, id: ProductId, result: Result<Product, ServiceError>) -> LoadOutcome {
        if let EditorPhase::Loading { pending } = self.phase {
            self.phase = match pending {
                0 | 1 => EditorPhase::Idle,
                n => EditorPhase::Loading { pending: n - 1 },
            };
        }

        if self.mode == EditorMode::Create {
            // The form left edit mode while this load was in flight
            debug!(product_id = %id, ok = result.is_ok(), "Dropping load completed in create mode");
            return LoadOutcome::Skipped;
        }

        match result {
            Ok(product) => {
                if self.mode != EditorMode::Edit(id) {
                    // Identifier changed while this load was in flight
                    debug!(product_id = %id, current = ?self.mode, "Applying load for a previous identifier");
                }
                info!(product_id = %id, "Product loaded");
                self.draft = product.draft.clone();
                LoadOutcome::Loaded(product)
            }
            Err(error) => {
                warn!(product_id = %id, error = %error, "Failed to load product");
                LoadOutcome::Failed(error)
            }
        }
    }

    /// Validates the draft and, if it passes, marks the editor as
    /// submitting and returns the call to make.
    pub fn begin_submit(&mut self) -> Result<SubmitRequest, SubmitOutcome> {
        if self.is_busy() {
            debug!(phase = ?self.phase, "Submission refused while busy");
            return Err(SubmitOutcome::Busy);
        }
        if let Err(reason) = self.draft.validate() {
            debug!(reason = %reason, "Submission rejected");
            return Err(SubmitOutcome::Rejected(reason));
        }

        let (action, request) = match self.mode {
            EditorMode::Create => (SaveAction::Created, SubmitRequest::Create(self.draft.clone())),
            EditorMode::Edit(id) => (SaveAction::Updated, SubmitRequest::Update(id, self.draft.clone())),
        };
        self.phase = EditorPhase::Submitting(action);
        debug!(request = ?request, "Submitting product");
        Ok(request)
    }

    pub fn complete_submit(&mut self, result: Result<Product, ServiceError>) -> SubmitOutcome {
        let action = match self.phase {
            EditorPhase::Submitting(action) => action,
            _ => match self.mode {
                EditorMode::Create => SaveAction::Created,
                EditorMode::Edit(_) => SaveAction::Updated,
            },
        };
        self.phase = EditorPhase::Idle;

        match result {
            Ok(product) => {
                info!(product_id = %product.id, action = ?action, "Product saved");
                SubmitOutcome::Saved {
                    action,
                    product,
                    navigate_to: self.listing_path.clone(),
                }
            }
            Err(error) => {
                warn!(error = %error, "Failed to save product");
                SubmitOutcome::Failed(error)
            }
        }
    }

    /// Loads the product being edited, if any.
    pub async fn load<S>(&mut self, service: &S) -> LoadOutcome
    where
        S: ProductService + ?Sized,
    {
        let id = match self.begin_load() {
            Ok(id) => id,
            Err(outcome) => return outcome,
        };
        let result = service.fetch_one(id).await;
        self.complete_load(id, result)
    }

    /// Validates, saves and, on success, navigates to the listing view.
    pub async fn submit<S, N>(&mut self, service: &S, navigator: &mut N) -> SubmitOutcome
    where
        S: ProductService + ?Sized,
        N: Navigator + ?Sized,
    {
        let request = match self.begin_submit() {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };
        let result = request.dispatch(service).await;
        let outcome = self.complete_submit(result);
        if let SubmitOutcome::Saved { navigate_to, .. } = &outcome {
            navigator.navigate(navigate_to);
        }
        outcome
    }

    /// Leaves the form without saving. Returns `false` while busy.
    pub fn cancel<N>(&self, navigator: &mut N) -> bool
    where
        N: Navigator + ?Sized,
    {
        if self.is_busy() {
            return false;
        }
        navigator.back();
        true
    }
}
