//! Salon administration: listing plus an inline draft form following the
//! same discipline as the book form (full-snapshot draft, whole-record save,
//! no save while one is in flight).

use web_sys::{Event, HtmlInputElement, HtmlTextAreaElement, InputEvent};
use yew::prelude::*;

use common::model::salon::Salon;

use crate::components::feedback::show_toast;
use crate::store::StoreContext;

pub enum SalonField {
    Nombre,
    Capacidad,
    Descripcion,
}

pub enum Msg {
    StoreUpdated(StoreContext),
    Nuevo,
    Editar(u32),
    Edit(SalonField, String),
    ToggleDisponible,
    Cancelar,
    Guardar,
    GuardarFinalizado(bool),
}

pub struct EditarCargarSalon {
    store: Option<StoreContext>,
    _handle: Option<ContextHandle<StoreContext>>,
    draft: Option<Salon>,
    saving: bool,
}

impl Component for EditarCargarSalon {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (store, handle) = match ctx
            .link()
            .context::<StoreContext>(ctx.link().callback(Msg::StoreUpdated))
        {
            Some((store, handle)) => (Some(store), Some(handle)),
            None => (None, None),
        };
        EditarCargarSalon {
            store,
            _handle: handle,
            draft: None,
            saving: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::StoreUpdated(store) => {
                self.store = Some(store);
                true
            }
            Msg::Nuevo => {
                self.draft = Some(Salon::default());
                true
            }
            Msg::Editar(id) => {
                let Some(store_ctx) = &self.store else {
                    return false;
                };
                match store_ctx.store.find_salon(id) {
                    Some(salon) => {
                        self.draft = Some(salon.clone());
                        true
                    }
                    None => false,
                }
            }
            Msg::Edit(field, value) => {
                if self.saving {
                    return false;
                }
                let Some(draft) = &mut self.draft else {
                    return false;
                };
                apply_salon_edit(draft, field, value)
            }
            Msg::ToggleDisponible => {
                if self.saving {
                    return false;
                }
                let Some(draft) = &mut self.draft else {
                    return false;
                };
                draft.disponible = !draft.disponible;
                true
            }
            Msg::Cancelar => {
                self.draft = None;
                true
            }
            Msg::Guardar => {
                if self.saving {
                    return false;
                }
                let (Some(store_ctx), Some(draft)) = (self.store.clone(), self.draft.clone())
                else {
                    return false;
                };
                self.saving = true;
                store_ctx.guardar_salon(draft, ctx.link().callback(Msg::GuardarFinalizado));
                true
            }
            Msg::GuardarFinalizado(ok) => {
                self.saving = false;
                if ok {
                    self.draft = None;
                    show_toast("Salón guardado.");
                } else {
                    // Draft stays intact so the user can retry.
                    show_toast("No se pudo guardar el salón.");
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(store_ctx) = &self.store else {
            return html! { <p>{ "Cargando…" }</p> };
        };
        let store = &store_ctx.store;

        html! {
            <div class="container mt-4">
                <div class="d-flex justify-content-between align-items-center mb-4">
                    <h2 class="mb-0">{ "Editar o cargar salón" }</h2>
                    <button class="btn btn-primary" onclick={ctx.link().callback(|_| Msg::Nuevo)}>
                        { "Nuevo salón" }
                    </button>
                </div>
                {
                    if !store.salones_cargados {
                        html! { <p>{ "Cargando salones…" }</p> }
                    } else if store.salones.is_empty() {
                        html! { <p>{ "No hay salones registrados." }</p> }
                    } else {
                        html! {
                            <table class="table table-hover align-middle">
                                <thead>
                                    <tr>
                                        <th>{ "Nombre" }</th>
                                        <th>{ "Capacidad" }</th>
                                        <th>{ "Disponible" }</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { store.salones.iter().map(|s| self.row(ctx, s)).collect::<Html>() }
                                </tbody>
                            </table>
                        }
                    }
                }
                { self.form(ctx) }
            </div>
        }
    }
}

/// Applies a single field edit to the salon draft. Capacity only accepts a
/// parseable number; anything else leaves the stored value untouched, so a
/// half-typed or cleared field never collapses the capacity to zero.
fn apply_salon_edit(draft: &mut Salon, field: SalonField, value: String) -> bool {
    match field {
        SalonField::Nombre => draft.nombre = value,
        SalonField::Capacidad => match value.parse() {
            Ok(capacidad) => draft.capacidad = capacidad,
            Err(_) => return false,
        },
        SalonField::Descripcion => draft.descripcion = value,
    }
    true
}

impl EditarCargarSalon {
    fn row(&self, ctx: &Context<Self>, salon: &Salon) -> Html {
        let action = match salon.id {
            Some(id) => html! {
                <td class="text-end">
                    <button
                        class="btn btn-sm btn-secondary"
                        onclick={ctx.link().callback(move |_| Msg::Editar(id))}
                    >
                        { "Editar" }
                    </button>
                </td>
            },
            None => html! { <td></td> },
        };
        html! {
            <tr>
                <td>{ &salon.nombre }</td>
                <td>{ salon.capacidad }</td>
                <td>{ if salon.disponible { "Sí" } else { "No" } }</td>
                { action }
            </tr>
        }
    }

    fn form(&self, ctx: &Context<Self>) -> Html {
        let Some(draft) = &self.draft else {
            return html! {};
        };
        let link = ctx.link();
        let heading = if draft.id.is_some() { "Modificar salón" } else { "Nuevo salón" };

        html! {
            <div class="card p-4 shadow-sm mt-4">
                <h4 class="mb-3">{ heading }</h4>
                <div class="row g-3">
                    <div class="col-md-6">
                        <label>{ "Nombre" }</label>
                        <input
                            type="text"
                            class="form-control"
                            value={draft.nombre.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                Msg::Edit(SalonField::Nombre, input.value())
                            })}
                        />
                    </div>
                    <div class="col-md-3">
                        <label>{ "Capacidad" }</label>
                        <input
                            type="number"
                            min="0"
                            class="form-control"
                            value={draft.capacidad.to_string()}
                            oninput={link.callback(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                Msg::Edit(SalonField::Capacidad, input.value())
                            })}
                        />
                    </div>
                    <div class="col-md-3 form-check d-flex align-items-end">
                        <label class="form-check-label">
                            <input
                                type="checkbox"
                                class="form-check-input me-2"
                                checked={draft.disponible}
                                onchange={link.callback(|_: Event| Msg::ToggleDisponible)}
                            />
                            { "Disponible para reservas" }
                        </label>
                    </div>
                    <div class="col-12">
                        <label>{ "Descripción" }</label>
                        <textarea
                            class="form-control"
                            value={draft.descripcion.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let textarea: HtmlTextAreaElement = e.target_unchecked_into();
                                Msg::Edit(SalonField::Descripcion, textarea.value())
                            })}
                        />
                    </div>
                    <div class="col-12">
                        <button
                            class="btn btn-primary me-2"
                            disabled={self.saving}
                            onclick={link.callback(|_| Msg::Guardar)}
                        >
                            { if self.saving { "Guardando…" } else { "Guardar" } }
                        </button>
                        <button class="btn btn-outline-secondary" onclick={link.callback(|_| Msg::Cancelar)}>
                            { "Cancelar" }
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_accepts_numeric_input() {
        let mut draft = Salon::default();
        assert!(apply_salon_edit(&mut draft, SalonField::Capacidad, "12".into()));
        assert_eq!(draft.capacidad, 12);
    }

    #[test]
    fn capacity_ignores_unparseable_input() {
        let mut draft = Salon {
            capacidad: 40,
            ..Salon::default()
        };
        assert!(!apply_salon_edit(&mut draft, SalonField::Capacidad, "abc".into()));
        assert!(!apply_salon_edit(&mut draft, SalonField::Capacidad, "".into()));
        assert!(!apply_salon_edit(&mut draft, SalonField::Capacidad, "-3".into()));
        assert_eq!(draft.capacidad, 40);
    }

    #[test]
    fn text_fields_take_the_value_verbatim() {
        let mut draft = Salon::default();
        apply_salon_edit(&mut draft, SalonField::Nombre, "Salón azul".into());
        apply_salon_edit(&mut draft, SalonField::Descripcion, "Planta baja".into());
        assert_eq!(draft.nombre, "Salón azul");
        assert_eq!(draft.descripcion, "Planta baja");
    }
}
