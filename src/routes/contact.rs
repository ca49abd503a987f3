use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect},
};
use fox2it_contact::{ContactForm, Field, FormController};
use strum::VariantArray;

use crate::{
    routes::AppState,
    template::{ContactFragmentTemplate, IndexTemplate, Template, Toast},
};

pub async fn page() -> impl IntoResponse {
    Redirect::to("/#contact")
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(input): Form<ContactForm>,
) -> impl IntoResponse {
    let mut controller = FormController::new(app_state.gateway);
    for field in Field::VARIANTS {
        controller.on_field_change(*field, input.get(*field));
    }

    let notification = controller.submit().await;
    let state = controller.state();
    let toast = Some(Toast::from(notification));

    if template.partial {
        return template.render(ContactFragmentTemplate {
            form: state.form.clone(),
            is_submitting: state.is_submitting,
            toast,
        });
    }

    template.render(IndexTemplate {
        form: state.form.clone(),
        is_submitting: state.is_submitting,
        toast,
        ..Default::default()
    })
}
