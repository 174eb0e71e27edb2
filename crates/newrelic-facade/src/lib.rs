// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! A facade over the New Relic agent API.
//!
//! Application code talks to the [`NewRelic`] trait and never has to check
//! whether the agent is actually loaded:
//!
//! - [`Extension`] forwards every call to the [`native::NativeAgent`].
//! - [`BlackHole`] accepts every call and does nothing.
//! - [`Adaptive`] picks one of the two once, when it is built, depending on
//!   whether an agent is installed in the process.
//! - [`LoggingDecorator`] emits a debug event for each call before forwarding
//!   it.
//!
//! ```
//! use newrelic_facade::{Adaptive, BlackHole, Config, Extension, LoggingDecorator, NewRelic};
//!
//! let newrelic = LoggingDecorator::with_current_dispatch(Adaptive::new(
//!     Extension::new(Config::default()),
//!     BlackHole,
//! ));
//! newrelic.set_transaction_name("checkout");
//! newrelic.add_custom_metric("Custom/latency", 12.5);
//! ```

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

pub mod adaptive;
pub mod api;
pub mod black_hole;
pub mod config;
pub mod error;
pub mod extension;
pub mod logging;
pub mod native;
pub mod segment;


pub use adaptive::Adaptive;
pub use api::{Attributes, NewRelic, Scalar};
pub use black_hole::BlackHole;
pub use config::Config;
pub use error::Error;
pub use extension::Extension;
pub use logging::LoggingDecorator;
pub use segment::DatastoreParams;
