//! Update function for the book form, Elm-style: takes the current state,
//! the component context and a message, mutates the state and says whether
//! the view must re-render.
//!
//! Guards enforced here
//! - Field edits and saves are only honored while `Phase::Editing`, which
//!   closes the double-submit window.
//! - Thumbnail reads carry the generation sequence issued when the file was
//!   picked; completions from a superseded pick are dropped.

use gloo_file::futures::read_as_data_url;
use gloo_file::Blob;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use crate::components::feedback::alert;
use crate::routes::AdminRoute;

use super::messages::Msg;
use super::state::{apply_edit, LibroForm, Phase};

pub fn update(form: &mut LibroForm, ctx: &Context<LibroForm>, msg: Msg) -> bool {
    match msg {
        Msg::StoreUpdated(store_ctx) => {
            if !form.seeded {
                form.seed(&store_ctx.store, ctx.props().libro_id);
            }
            form.store = Some(store_ctx);
            true
        }
        Msg::Edit(field, value) => {
            if !form.can_edit() {
                return false;
            }
            apply_edit(&mut form.draft, field, value);
            true
        }
        Msg::FileSelected(file) => {
            if !form.can_edit() {
                return false;
            }
            form.read_seq += 1;
            let seq = form.read_seq;
            let link = ctx.link().clone();
            spawn_local(async move {
                let blob = Blob::from(file);
                // A failed read is silent: the thumbnail keeps its value.
                if let Ok(data_url) = read_as_data_url(&blob).await {
                    link.send_message(Msg::FileRead { seq, data_url });
                }
            });
            false
        }
        Msg::FileRead { seq, data_url } => {
            if !form.accepts_read(seq) {
                return false;
            }
            form.draft.miniatura = data_url;
            true
        }
        Msg::Save => {
            if !form.can_save() {
                return false;
            }
            let Some(store_ctx) = form.store.clone() else {
                return false;
            };
            form.phase = Phase::Saving;
            // A read still in flight must not land on the saved draft.
            form.invalidate_reads();
            store_ctx.guardar_libro(form.draft.clone(), ctx.link().callback(Msg::SaveFinished));
            true
        }
        Msg::SaveFinished(ok) => {
            form.finish_save(ok);
            if ok {
                alert("Libro actualizado exitosamente");
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&AdminRoute::EditarCargarLibro);
                }
            } else {
                // Draft stays intact so the user can retry.
                alert("Error al actualizar el libro. Intente nuevamente.");
            }
            true
        }
        Msg::Volver => {
            if let Some(navigator) = ctx.link().navigator() {
                navigator.push(&AdminRoute::EditarCargarLibro);
            }
            false
        }
    }
}
