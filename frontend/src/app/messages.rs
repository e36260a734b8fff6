use common::edit::ProductEdit;
use common::flows::UploadError;
use common::model::document::DocumentRecord;
use common::model::settings::ClientSettings;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tab {
    Invoices,
    Products,
    Customers,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Invoices, Tab::Products, Tab::Customers];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Invoices => "Invoices",
            Tab::Products => "Products",
            Tab::Customers => "Customers",
        }
    }
}

pub enum Msg {
    SettingsLoaded(ClientSettings),
    DocumentsLoaded(Vec<DocumentRecord>),
    /// Full collection pushed by the change feed.
    Snapshot(Vec<DocumentRecord>),
    FileChosen(Option<web_sys::File>),
    Upload,
    UploadFinished(Result<DocumentRecord, UploadError>),
    SelectDocument(String),
    DeleteDocument(String),
    Deleted(String),
    SetTab(Tab),
    SaveProduct(String, ProductEdit),
    ProductSaved(DocumentRecord),
}
