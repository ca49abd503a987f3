use anyhow::Result;
use fox2it::Config;
use fox2it_contact::{EventSink, Field, FormController, FormEvent};

/// Send one contact message through the configured gateway from the terminal
pub async fn submit(config: Config, name: String, email: String, message: String) -> Result<()> {
    let gateway = fox2it::build_gateway(&config)?;
    let (events, mut rx) = EventSink::channel();

    let mut controller = FormController::new(gateway).with_events(events);
    controller.on_field_change(Field::Name, name);
    controller.on_field_change(Field::Email, email);
    controller.on_field_change(Field::Message, message);

    let printer = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            match event {
                FormEvent::Submitting(true) => println!("Sending..."),
                FormEvent::Submitting(false) => {}
                FormEvent::Notified(notification) => println!("{notification}"),
                FormEvent::Reset => tracing::debug!("Form reset"),
            }
        }
    });

    let notification = controller.submit().await;
    drop(controller);
    printer.await?;

    if !notification.is_success() {
        anyhow::bail!("contact message was not sent");
    }

    Ok(())
}
