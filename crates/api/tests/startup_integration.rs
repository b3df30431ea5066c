//! `AppContext::startup` in its own test binary, since it installs the
//! global tracing subscriber and reads process environment. Kept as a single
//! test so the environment is never shared between threads.

use sdc_domain::SdcError;
use sdc_lib::AppContext;

#[test]
fn startup_loads_config_then_installs_tracing() {
    std::env::set_var("SDC_BASE_URL", "http://collector.test:18630");
    std::env::set_var("SDC_TIMEOUT_SECONDS", "soon");

    let err = AppContext::startup().err().expect("invalid timeout is rejected");
    assert!(matches!(err, SdcError::Config(msg) if msg.contains("soon")));
    assert!(!tracing::dispatcher::has_been_set());

    std::env::set_var("SDC_TIMEOUT_SECONDS", "5");
    std::env::set_var("SDC_LOG_LEVEL", "debug");

    let ctx = AppContext::startup().expect("startup");

    assert!(tracing::dispatcher::has_been_set());
    assert_eq!(ctx.config.base_url, "http://collector.test:18630");
    assert_eq!(ctx.config.timeout_seconds, 5);
    assert_eq!(ctx.config.logging.level, "debug");
}
