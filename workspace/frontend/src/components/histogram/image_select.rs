use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ImageSelectProps {
    pub select_ref: NodeRef,
    pub images: Vec<String>,
    #[prop_or_default]
    pub loading: bool,
}

/// The `image_id` control. The leading empty option means "nothing selected".
#[function_component(ImageSelect)]
pub fn image_select(props: &ImageSelectProps) -> Html {
    html! {
        <div class="form-control">
            <label class="label" for="image_id"><span class="label-text">{"Image"}</span></label>
            <div class="flex items-center gap-2">
                <select
                    ref={props.select_ref.clone()}
                    id="image_id"
                    name="image_id"
                    class="select select-bordered w-full"
                    disabled={props.loading}
                >
                    <option value="" selected=true>{"-- Select an image --"}</option>
                    { for props.images.iter().map(|image| html! {
                        <option key={image.clone()} value={image.clone()}>{image}</option>
                    })}
                </select>
                {if props.loading {
                    html! { <span class="loading loading-spinner loading-sm"></span> }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
