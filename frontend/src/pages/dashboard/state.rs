//! State container for the admin dashboard.

use common::model::form::ProductForm;
use common::model::product::Product;

/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct DashboardPage {
    /// Current product table, newest first.
    pub products: Vec<Product>,

    /// True while the table or a write operation is in flight; disables
    /// the form buttons.
    pub loading: bool,

    /// Whether the add/edit modal is open.
    pub modal_open: bool,

    /// The product being edited, or `None` when the modal adds a new one.
    pub editing: Option<Product>,

    /// Raw form values, validated only on submit.
    pub form: ProductForm,

    /// Guard to avoid running first-render initialization more than once.
    pub initialized: bool,
}

impl DashboardPage {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            loading: true,
            modal_open: false,
            editing: None,
            form: ProductForm::default(),
            initialized: false,
        }
    }

    /// Prefills the form from `product`, or clears it for a new entry.
    pub fn fill_form(&mut self, product: Option<Product>) {
        match &product {
            Some(p) => {
                self.form = ProductForm {
                    name: p.name.clone(),
                    description: p.description.clone(),
                    price: p.price.to_string(),
                    image: p.image.clone(),
                    external_link: p.external_link.clone(),
                };
            }
            None => self.form = ProductForm::default(),
        }
        self.editing = product;
    }
}
