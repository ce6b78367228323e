#[derive(Debug, Clone)]
pub struct AccessToken(pub String);
