//! Configuration prompt shown instead of the application when no backend URL
//! was injected into the hosting page.

use yew::{html, Component, Context, Html};

pub struct BackendUrl;

impl Component for BackendUrl {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        BackendUrl
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="container mt-5" style="max-width: 640px;">
                <div class="card p-4 shadow-sm">
                    <h2>{ "Falta configurar el backend" }</h2>
                    <p>
                        { "La aplicación no encontró la URL del backend. Definí la variable \
                           global antes de cargar la aplicación, por ejemplo:" }
                    </p>
                    <pre class="bg-light p-3">
                        { "<script>\n  window.BACKEND_URL = \"https://mi-backend.example.org\";\n</script>" }
                    </pre>
                    <p class="mb-0">
                        { "Luego recargá la página. También puede definirse \
                           window.BASENAME si la aplicación no vive en la raíz del sitio." }
                    </p>
                </div>
            </div>
        }
    }
}
