//! Tracing setup.
//!
//! The subscriber is installed before the config file is read, so config
//! loading is traced too. Its filter starts from `RUST_LOG` (or
//! [`BOOTSTRAP_FILTER`]) and is swapped for the configured `log_filter`
//! once the config is known, unless `RUST_LOG` was set.

use crate::config::XoConfig;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, reload};

/// Filter in effect until the config is loaded, when `RUST_LOG` is unset.
pub const BOOTSTRAP_FILTER: &str = "xo=info,warn";

/// Handle for replacing the filter of a subscriber built by [`subscriber`].
#[derive(Debug, Clone)]
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

impl LogHandle {
    /// Returns true if the filter came from `RUST_LOG`.
    pub fn from_env(&self) -> bool {
        self.from_env
    }

    /// Switches to the configured filter. `RUST_LOG` keeps precedence.
    pub fn apply(&self, config: &XoConfig) -> anyhow::Result<()> {
        if self.from_env {
            return Ok(());
        }
        self.filter.reload(EnvFilter::try_new(config.log_filter())?)?;
        Ok(())
    }
}

/// Builds a subscriber writing formatted events to `make_writer`.
pub fn subscriber<W>(make_writer: W) -> (impl Subscriber + Send + Sync + 'static, LogHandle)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (initial, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(BOOTSTRAP_FILTER), false),
    };
    let (filter, handle) = reload::Layer::new(initial);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(make_writer)
                .with_ansi(false),
        );

    (
        subscriber,
        LogHandle {
            filter: handle,
            from_env,
        },
    )
}
