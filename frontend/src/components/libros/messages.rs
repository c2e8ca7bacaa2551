use crate::store::StoreContext;

use super::state::Field;

pub enum Msg {
    StoreUpdated(StoreContext),
    Edit(Field, String),
    FileSelected(web_sys::File),
    FileRead { seq: u32, data_url: String },
    Save,
    SaveFinished(bool),
    Volver,
}
