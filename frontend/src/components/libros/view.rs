//! View rendering for the book form: a back button, the form card with one
//! input per draft attribute, the thumbnail picker with preview, and the
//! save button. The heading carries the unsaved-changes dot.

use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use common::model::book::BookGender;

use super::messages::Msg;
use super::state::{Field, LibroForm, Phase};

pub fn view(form: &LibroForm, ctx: &Context<LibroForm>) -> Html {
    let link = ctx.link();

    if form.phase == Phase::Loading {
        return html! {
            <div class="container mt-4">
                <p>{ "Cargando libro…" }</p>
            </div>
        };
    }

    let editing_existing = ctx.props().libro_id.is_some();
    let heading = if editing_existing { "Modificar Libro" } else { "Subir Libro" };

    html! {
        <div class="container mt-4">
            <button class="btn btn-secondary mb-3" onclick={link.callback(|_| Msg::Volver)}>
                { "Atrás" }
            </button>
            <h2 class="mb-4" style="position: relative; display: inline-block;">
                { heading }
                {
                    if form.dirty() {
                        html! {
                            <span
                                title="Cambios sin guardar"
                                style="position:absolute;top:0;right:-14px;width:8px;height:8px;background:#e53935;border-radius:50%;display:inline-block;"
                            />
                        }
                    } else {
                        html! {}
                    }
                }
            </h2>
            <div class="card p-4 shadow-sm">
                <div class="row g-3">
                    <div class="col-md-6">
                        <label>{ "Título" }</label>
                        <input
                            type="text"
                            class="form-control"
                            value={form.draft.title.clone()}
                            oninput={text_edit(link, Field::Title)}
                        />
                    </div>
                    <div class="col-md-6">
                        <label>{ "Autor" }</label>
                        <input
                            type="text"
                            class="form-control"
                            value={form.draft.author.clone()}
                            oninput={text_edit(link, Field::Author)}
                        />
                    </div>
                    <div class="col-md-6">
                        <label>{ "Género" }</label>
                        <select
                            class="form-select"
                            onchange={link.callback(|e: Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                Msg::Edit(Field::Gender, select.value())
                            })}
                        >
                            <option value="" selected={form.draft.book_gender.is_empty()}>
                                { "Seleccionar" }
                            </option>
                            {
                                BookGender::ALL.iter().map(|gender| {
                                    let label = gender.label();
                                    html! {
                                        <option
                                            value={label}
                                            selected={form.draft.book_gender == label}
                                        >
                                            { label }
                                        </option>
                                    }
                                }).collect::<Html>()
                            }
                        </select>
                    </div>
                    <div class="col-12">
                        <label>{ "Resumen" }</label>
                        <textarea
                            class="form-control"
                            value={form.draft.summary.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let textarea: HtmlTextAreaElement = e.target_unchecked_into();
                                Msg::Edit(Field::Summary, textarea.value())
                            })}
                        />
                    </div>
                    <div class="col-12">
                        <label>{ "Miniatura" }</label>
                        <input
                            type="file"
                            class="form-control"
                            accept="image/*"
                            onchange={link.batch_callback(|e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                input.files().and_then(|files| files.get(0)).map(Msg::FileSelected)
                            })}
                        />
                        {
                            if form.draft.miniatura.is_empty() {
                                html! {}
                            } else {
                                html! {
                                    <div class="mt-3">
                                        <img
                                            src={form.draft.miniatura.clone()}
                                            alt="Vista previa de la miniatura"
                                            style="max-width: 200px; max-height: 200px;"
                                        />
                                    </div>
                                }
                            }
                        }
                    </div>
                    <button
                        class="btn btn-primary mt-3"
                        disabled={form.phase == Phase::Saving}
                        onclick={link.callback(|_| Msg::Save)}
                    >
                        { if form.phase == Phase::Saving { "Guardando…" } else { "Guardar Cambios" } }
                    </button>
                </div>
            </div>
        </div>
    }
}

fn text_edit(link: &Scope<LibroForm>, field: Field) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Edit(field, input.value())
    })
}
