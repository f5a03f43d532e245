use gloo_timers::callback::Timeout;
use yew::prelude::*;
use crate::settings;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastType {
    Warning,
}

impl ToastType {
    fn alert_class(self) -> &'static str {
        match self {
            ToastType::Warning => "alert-warning",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastType::Warning => "fas fa-exclamation-triangle",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub toast_type: ToastType,
}

/// Non-blocking notifications for background loads. Submission errors use
/// blocking alerts instead.
#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub add_toast: Callback<(String, ToastType)>,
    pub remove_toast: Callback<usize>,
}

impl ToastContext {
    pub fn show_warning(&self, message: String) {
        self.add_toast.emit((message, ToastType::Warning));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    // Timeouts fire after later renders, so the list lives in a ref.
    let toasts = use_mut_ref(Vec::<Toast>::new);
    let next_id = use_mut_ref(|| 0usize);
    let redraw = use_force_update();

    let remove_toast = {
        let toasts = toasts.clone();
        let redraw = redraw.clone();

        Callback::from(move |id: usize| {
            toasts.borrow_mut().retain(|t| t.id != id);
            redraw.force_update();
        })
    };

    let add_toast = {
        let toasts = toasts.clone();
        let remove_toast = remove_toast.clone();

        Callback::from(move |(message, toast_type): (String, ToastType)| {
            let id = {
                let mut next_id = next_id.borrow_mut();
                *next_id += 1;
                *next_id
            };
            toasts.borrow_mut().push(Toast { id, message, toast_type });
            redraw.force_update();

            let remove_toast = remove_toast.clone();
            Timeout::new(settings::get_settings().toast_duration_ms, move || {
                remove_toast.emit(id);
            })
            .forget();
        })
    };

    let context = ToastContext {
        add_toast,
        remove_toast: remove_toast.clone(),
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for toasts.borrow().iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let remove_toast = remove_toast.clone();
                        Callback::from(move |_| remove_toast.emit(id))
                    };

                    html! {
                        <div key={id} class={classes!("alert", toast.toast_type.alert_class(), "shadow-lg")}>
                            <i class={toast.toast_type.icon()}></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
