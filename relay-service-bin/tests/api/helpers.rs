use fake::{Fake, faker::internet::en::Username};
use relay_adapters::{
    config::{RelayConfig, RelaySetting, constants},
    upstream::HttpSecurityCheck,
};
use relay_service_lib::RelayService;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub config: RelayConfig,
}

impl TestApp {
    /// Spawn the relay on an ephemeral port. With `login_url = None` the
    /// relay derives the upstream target from the inbound request.
    pub async fn spawn(login_url: Option<String>) -> Self {
        let mut setting = RelaySetting::default();
        setting.app.address = constants::test::APP_ADDRESS.to_owned();
        setting.upstream.connect_timeout_millis =
            constants::test::upstream::CONNECT_TIMEOUT.as_millis() as u64;
        setting.upstream.timeout_millis =
            constants::test::upstream::TIMEOUT.as_millis() as u64;
        if let Some(login_url) = login_url {
            setting.login_url = login_url;
        }

        let config = RelayConfig::activate(setting);
        let active = config.load();

        let security_check =
            HttpSecurityCheck::from_settings(&active).expect("Failed to build upstream client");

        let listener = tokio::net::TcpListener::bind(&active.app.address)
            .await
            .expect("Failed to bind ephemeral port");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let app = RelayService::new(security_check, config.clone());
        tokio::spawn(app.run_standalone(listener, active.allowed_origins()));

        Self {
            address,
            http_client: reqwest::Client::new(),
            config,
        }
    }

    pub async fn post_login(&self, form: &[(&str, &str)]) -> reqwest::Response {
        self.http_client
            .post(format!("{}{}", self.address, constants::LOGIN_ROUTE))
            .form(form)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// Start a fake upstream that answers `status` on the security check path;
/// returns the server handle and the matching login URL.
pub async fn upstream_with_status(status: u16) -> (MockServer, String) {
    let upstream = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(constants::SECURITY_CHECK_PATH))
        .respond_with(ResponseTemplate::new(status))
        .mount(&upstream)
        .await;

    let login_url = format!("{}{}", upstream.uri(), constants::SECURITY_CHECK_PATH);
    (upstream, login_url)
}

pub fn random_username() -> String {
    Username().fake()
}
