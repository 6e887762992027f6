use crate::layout::global_context::InventoryContext;
use crate::shared::toast::ToastService;
use contracts::domain::a001_product::{parse_price, parse_stock, ProductDto, ProductId};
use contracts::domain::a002_category::CategoryCatalog;
use contracts::domain::common::ValidationError;
use leptos::prelude::*;

/// Raw text of the product form, parsed on submit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFormInput {
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    pub price: String,
    pub stock: String,
}

impl ProductFormInput {
    pub fn from_dto(dto: &ProductDto) -> Self {
        Self {
            id: dto.id.clone(),
            name: dto.name.clone(),
            category: dto.category.clone(),
            price: if dto.price > 0.0 {
                dto.price.to_string()
            } else {
                String::new()
            },
            stock: dto.stock.to_string(),
        }
    }

    /// Parse and validate every field; all errors are reported together
    pub fn to_dto(&self, categories: &CategoryCatalog) -> Result<ProductDto, Vec<ValidationError>> {
        let (stock, stock_error) = match parse_stock(&self.stock) {
            Ok(stock) => (stock, None),
            Err(e) => (0, Some(e)),
        };
        let dto = ProductDto {
            id: self.id.clone(),
            name: self.name.clone(),
            category: self.category.clone(),
            price: parse_price(&self.price),
            stock,
        };

        let mut errors = dto.validate_all(categories);
        errors.extend(stock_error);
        if errors.is_empty() {
            Ok(dto)
        } else {
            Err(errors)
        }
    }
}

/// ViewModel for the product create/edit form
#[derive(Clone, Copy)]
pub struct ProductFormViewModel {
    pub form: RwSignal<ProductFormInput>,
    pub errors: RwSignal<Vec<ValidationError>>,
    toasts: Option<ToastService>,
}

impl ProductFormViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProductFormInput::default()),
            errors: RwSignal::new(Vec::new()),
            toasts: use_context::<ToastService>(),
        }
    }

    fn reject(&self, errors: Vec<ValidationError>) {
        log::debug!("product form rejected: {} error(s)", errors.len());
        if let Some(toasts) = self.toasts {
            toasts.error(rejection_message(errors.len()));
        }
        self.errors.set(errors);
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    /// Fill the form from the stored product, or blank with the first
    /// category pre-selected
    pub fn load(&self, ctx: &InventoryContext, id: Option<ProductId>) {
        let dto = ctx.store.with_untracked(|s| {
            id.as_ref()
                .and_then(|id| s.product(id))
                .map(|p| p.to_dto())
                .unwrap_or_else(|| {
                    ProductDto::new_for_insert(s.categories().first().unwrap_or_default())
                })
        });
        self.form.set(ProductFormInput::from_dto(&dto));
        self.errors.set(Vec::new());
    }

    /// First error message for a form field
    pub fn field_error(&self, field: &'static str) -> Option<String> {
        self.errors.with(|errors| {
            errors
                .iter()
                .find(|e| e.field() == field)
                .map(ToString::to_string)
        })
    }

    /// Validate and write to the store. Returns `true` when the dialog can close.
    pub fn save_command(&self, ctx: &InventoryContext) -> bool {
        let input = self.form.get_untracked();
        let dto = match ctx.store.with_untracked(|s| input.to_dto(s.categories())) {
            Ok(dto) => dto,
            Err(errors) => {
                self.reject(errors);
                return false;
            }
        };

        let result = match dto.id.clone() {
            Some(id) => ctx.update_product(&ProductId::new(id), &dto).map(|updated| {
                if !updated {
                    log::warn!("edited product no longer exists; nothing saved");
                }
            }),
            None => ctx.add_product(&dto),
        };

        match result {
            Ok(()) => {
                self.errors.set(Vec::new());
                true
            }
            Err(e) => {
                self.reject(vec![e]);
                false
            }
        }
    }
}

/// Toast text for a save that did not pass validation
fn rejection_message(count: usize) -> String {
    if count == 1 {
        "Please fix the highlighted field".to_string()
    } else {
        format!("Please fix the {} highlighted fields", count)
    }
}

impl Default for ProductFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}
