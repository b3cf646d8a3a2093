// Copyright (c) 2025 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://github.com/mintlayer/mintlayer-core/blob/master/LICENSE
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod log_style;
mod utils;

pub use log;

pub use log_style::{get_log_style_from_env, LogStyle, LogStyleParseError};
pub use utils::{get_from_env, GetFromEnvError};

/// Env var selecting the output style, see [`LogStyle::parse`] for the accepted values.
pub const LOG_STYLE_ENV_VAR: &str = "BIGNUM_LOG_STYLE";

static INITIALIZE_LOGGER_ONCE_FLAG: std::sync::Once = std::sync::Once::new();

/// Installs the global logger.
///
/// The level filter is read from `RUST_LOG` and the output style from [`LOG_STYLE_ENV_VAR`].
/// Only the first call has any effect; a logger installed by the host application is left in
/// place.
pub fn init_logging() {
    INITIALIZE_LOGGER_ONCE_FLAG.call_once(|| {
        let style = get_log_style_from_env(LOG_STYLE_ENV_VAR).unwrap_or_else(|err| {
            eprintln!("Ignoring {LOG_STYLE_ENV_VAR}: {err}");
            None
        });

        let mut builder = env_logger::Builder::from_default_env();
        builder.write_style(style.unwrap_or(LogStyle::Auto).write_style());

        if let Err(err) = builder.try_init() {
            eprintln!("Logger not installed: {err}");
        }
    });
}
