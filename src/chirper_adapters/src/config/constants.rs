pub mod env {
    pub const SESSION_SECRET_ENV_VAR: &str = "CHIRPER__SESSION__SECRET";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const POSTMARK_AUTH_TOKEN_ENV_VAR: &str = "CHIRPER__EMAIL__AUTHORIZATION_TOKEN";
    pub const CONFIG_FILE_ENV_VAR: &str = "CHIRPER_CONFIG";
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";

    pub mod email_client {
        use std::time::Duration;

        pub const BASE_URL: &str = "https://api.postmarkapp.com/";
        pub const SENDER: &str = "twitter@noreply.com";
        pub const TIMEOUT: Duration = Duration::from_secs(10);
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";

    pub mod email_client {
        use std::time::Duration;

        pub const SENDER: &str = "twitter@noreply.com";
        pub const TIMEOUT: Duration = Duration::from_millis(200);
    }
}
