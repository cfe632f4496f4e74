use postbox_api_rest::RestServer;
use postbox_config::Config;
use postbox_core_message_impl::MessageServiceImpl;
use postbox_shared_impl::id::MessageIdServiceImpl;
use postbox_templates_impl::TemplateServiceImpl;
use tracing::info;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let server = RestServer {
        message: MessageServiceImpl {
            id: MessageIdServiceImpl::default(),
        },
        template: TemplateServiceImpl::default(),
    };

    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
