//! tracing 구독자 초기화.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 로그를 stderr로 보낸다. `RUST_LOG`가 있으면 우선 적용하고, 없으면 `verbose`에 따라
/// debug 또는 warn 레벨을 사용한다. 이미 전역 구독자가 있으면 그대로 두고 false.
pub fn init(verbose: bool) -> bool {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    match tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
    {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(%err, "tracing 구독자가 이미 설정됨");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::init;

    #[test]
    fn second_init_keeps_existing_subscriber() {
        init(false);
        assert!(!init(true));
    }
}
