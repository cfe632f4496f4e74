use std::{net::IpAddr, sync::Arc};

use axum::Router;
use postbox_core_message_contracts::MessageService;
use postbox_templates_contracts::TemplateService;
use tokio::net::TcpListener;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Message, Template> {
    pub message: Message,
    pub template: Template,
}

impl<Message, Template> RestServer<Message, Template>
where
    Message: MessageService,
    Template: TemplateService,
{
    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let message = Arc::new(self.message);
        let template = Arc::new(self.template);

        let router = Router::new()
            .merge(routes::message::router(Arc::clone(&message)))
            .merge(routes::contact_page::router(message, template));

        let router = middlewares::trace::add(router);
        let router = middlewares::request_id::add(router);
        middlewares::panic_handler::add(router)
    }
}
