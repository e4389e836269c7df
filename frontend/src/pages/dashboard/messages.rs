use common::model::product::Product;

pub enum Msg {
    StorageUnavailable,
    ProductsLoaded(Vec<Product>),
    OpenModal(Option<Product>),
    CloseModal,
    SetName(String),
    SetDescription(String),
    SetPrice(String),
    SetExternalLink(String),
    FileSelected(web_sys::File),
    ImageLoaded(String),
    Submit,
    Saved(&'static str),
    OperationFailed(String),
    Delete(String),
    Logout,
}
