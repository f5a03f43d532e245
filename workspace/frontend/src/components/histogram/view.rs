use common::ImageCatalog;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use crate::api_client::catalog::get_image_catalog;
use crate::api_client::histogram::HttpHistogramSource;
use crate::chart::HistogramRenderer;
use crate::common::error::ErrorDisplay;
use crate::common::fetch_hook::use_reloadable;
use crate::common::toast::ToastContext;
use crate::hooks::FetchState;
use crate::settings;
use crate::submit::FormSubmitHandler;
use super::image_select::ImageSelect;
use super::page::ViewPage;
use super::plotly_chart::PlotlyBackend;

pub const CHART_ELEMENT_ID: &str = "histogramChart";

fn display(visible: bool) -> &'static str {
    if visible { "display: block;" } else { "display: none;" }
}

/// What the user is told about the image list. Each state yields at most
/// one notice: a failed load is shown inline with a retry button, an empty
/// catalog as a toast.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogNotice {
    LoadFailed(String),
    Empty,
}

pub fn catalog_notice(state: &FetchState<ImageCatalog>) -> Option<CatalogNotice> {
    match state {
        FetchState::Error(err) => Some(CatalogNotice::LoadFailed(err.clone())),
        FetchState::Success(catalog) if catalog.is_empty() => Some(CatalogNotice::Empty),
        _ => None,
    }
}

#[function_component(HistogramView)]
pub fn histogram_view() -> Html {
    let (catalog_state, reload_catalog) = use_reloadable(get_image_catalog);
    let toast_ctx = use_context::<ToastContext>();
    let notice = catalog_notice(&catalog_state);

    use_effect_with(notice.clone(), move |notice| {
        if let (Some(CatalogNotice::Empty), Some(toast_ctx)) = (notice, toast_ctx.as_ref()) {
            toast_ctx.show_warning("The server has no images to choose from.".to_string());
        }
        || ()
    });

    let select_ref = use_node_ref();
    let selected_image = use_state(|| None::<String>);
    let histogram_image = use_state(|| None::<String>);
    let results_visible = use_state(|| false);
    let renderer = use_mut_ref(|| HistogramRenderer::new(PlotlyBackend::new(CHART_ELEMENT_ID)));

    // Plotly sizes a plot drawn into a hidden container as zero-width.
    {
        let renderer = renderer.clone();
        use_effect_with(*results_visible, move |visible| {
            if *visible {
                renderer.borrow().refresh_layout();
            }
            || ()
        });
    }

    let on_submit = {
        let select_ref = select_ref.clone();
        let page = ViewPage {
            selected_image: selected_image.clone(),
            histogram_image: histogram_image.clone(),
            results_visible: results_visible.clone(),
            renderer: renderer.clone(),
        };

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let image_id = select_ref
                .cast::<HtmlSelectElement>()
                .map(|select| select.value())
                .unwrap_or_default();

            let handler = FormSubmitHandler::new(
                HttpHistogramSource,
                page.clone(),
                &settings::get_settings(),
            );

            wasm_bindgen_futures::spawn_local(async move {
                // Failures have already been alerted by the handler.
                if let Err(e) = handler.submit(&image_id).await {
                    log::debug!("Submission for '{}' ended with: {:?}", image_id, e);
                }
            });
        })
    };

    let images = catalog_state
        .data()
        .map(|catalog| catalog.images.clone())
        .unwrap_or_default();

    html! {
        <div class="container mx-auto px-4 py-8">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Image Histogram"}</h2>
                    <p class="text-sm text-gray-500">{"Pick an image to see the distribution of its pixel intensities."}</p>

                    {if let Some(CatalogNotice::LoadFailed(error)) = notice {
                        html! {
                            <ErrorDisplay
                                message={error}
                                on_retry={Some(reload_catalog.clone())}
                            />
                        }
                    } else {
                        html! {}
                    }}

                    <form id="histogram-form" onsubmit={on_submit} class="space-y-4">
                        <ImageSelect select_ref={select_ref} images={images} loading={catalog_state.is_loading()} />
                        <button type="submit" class="btn btn-primary">{"Show Histogram"}</button>
                    </form>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mt-6">
                <img
                    id="selected-image"
                    alt="Selected image"
                    class="rounded shadow max-w-full"
                    src={(*selected_image).clone()}
                    style={display(selected_image.is_some())}
                />
                <img
                    id="histogram-image"
                    alt="Rendered histogram"
                    class="rounded shadow max-w-full"
                    src={(*histogram_image).clone()}
                    style={display(histogram_image.is_some())}
                />
            </div>

            <div id="histogram-results" class="card bg-base-100 shadow mt-6" style={display(*results_visible)}>
                <div class="card-body">
                    <h3 class="card-title text-lg">{"Pixel Intensity Distribution"}</h3>
                    <div id={CHART_ELEMENT_ID} style="width:100%; height:400px;"></div>
                </div>
            </div>
        </div>
    }
}
