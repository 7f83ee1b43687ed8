use std::cell::RefCell;
use std::ffi::OsString;
use std::fs;
use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

use remotectl_config::{
    AudioDriver, Config, ListenEndpoint, default_listen_endpoint, default_log_filter,
    default_log_format,
};

const LISTEN_ENV_VAR: &str = "REMOTECTL_LISTEN";

static ENV_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

struct Harness {
    temp_dir: TempDir,
    cli_args: RefCell<Vec<OsString>>,
    env_overrides: RefCell<Vec<(String, Option<OsString>)>>,
    loaded: RefCell<Option<Config>>,
    error: RefCell<Option<String>>,
    _env_guard: MutexGuard<'static, ()>,
}

impl Harness {
    fn new() -> Self {
        let env_guard = ENV_MUTEX.lock().unwrap_or_else(PoisonError::into_inner);
        let temp_dir = match TempDir::new() {
            Ok(dir) => dir,
            Err(error) => panic!("failed to create temporary directory: {error}"),
        };
        let harness = Self {
            temp_dir,
            cli_args: RefCell::new(vec![OsString::from("remotectld")]),
            env_overrides: RefCell::new(Vec::new()),
            loaded: RefCell::new(None),
            error: RefCell::new(None),
            _env_guard: env_guard,
        };
        // Start every scenario from a clean environment.
        harness.clear_env(LISTEN_ENV_VAR);
        harness
    }

    fn write_config(&self, endpoint: &ListenEndpoint) {
        let path = self.temp_dir.path().join("remotectl.toml");
        if let Err(error) = fs::write(&path, format!("listen = \"{endpoint}\"\n")) {
            panic!("failed to write configuration: {error}");
        }

        let mut args = self.cli_args.borrow_mut();
        args.push(OsString::from("--config-path"));
        args.push(path.into_os_string());
    }

    fn set_env(&self, key: &str, value: &str) {
        let previous = std::env::var_os(key);
        // Environment mutation is `unsafe` on edition 2024. The harness holds
        // `ENV_MUTEX` and restores overrides in `Drop`.
        unsafe { std::env::set_var(key, value) };
        self.env_overrides
            .borrow_mut()
            .push((key.to_owned(), previous));
    }

    fn clear_env(&self, key: &str) {
        let previous = std::env::var_os(key);
        if previous.is_some() {
            unsafe { std::env::remove_var(key) };
            self.env_overrides
                .borrow_mut()
                .push((key.to_owned(), previous));
        }
    }

    fn push_cli_arg(&self, arg: impl Into<OsString>) {
        self.cli_args.borrow_mut().push(arg.into());
    }

    fn load(&self) {
        if self.loaded.borrow().is_some() || self.error.borrow().is_some() {
            return;
        }

        let args = self.cli_args.borrow().clone();
        match Config::load_from_iter(args) {
            Ok(config) => {
                *self.loaded.borrow_mut() = Some(config);
            }
            Err(error) => {
                *self.error.borrow_mut() = Some(error.to_string());
            }
        }
    }

    fn loaded_config(&self) -> Config {
        self.load();

        if let Some(error) = self.error.borrow().as_ref() {
            panic!("configuration failed to load: {error}");
        }

        match self.loaded.borrow().as_ref() {
            Some(config) => config.clone(),
            None => panic!("configuration was not loaded"),
        }
    }
}

impl Drop for Harness {
    fn drop(&mut self) {
        let mut overrides = self.env_overrides.borrow_mut();
        while let Some((key, value)) = overrides.pop() {
            if let Some(os_value) = value {
                unsafe { std::env::set_var(&key, os_value) };
            } else {
                unsafe { std::env::remove_var(&key) };
            }
        }
    }
}

fn parse_endpoint(text: &str) -> ListenEndpoint {
    match text.parse::<ListenEndpoint>() {
        Ok(endpoint) => endpoint,
        Err(error) => panic!("invalid endpoint '{text}': {error}"),
    }
}

#[fixture]
fn harness() -> Harness {
    Harness::new()
}

#[given("a configuration file setting the listen endpoint to {endpoint}")]
fn given_configuration_file(harness: &Harness, endpoint: String) {
    harness.write_config(&parse_endpoint(&endpoint));
}

#[given("the environment overrides the listen endpoint to {endpoint}")]
fn given_environment_override(harness: &Harness, endpoint: String) {
    harness.set_env(LISTEN_ENV_VAR, &endpoint);
}

#[when("the CLI sets the listen endpoint to {endpoint}")]
fn when_cli_override(harness: &Harness, endpoint: String) {
    harness.push_cli_arg("--listen");
    harness.push_cli_arg(OsString::from(&endpoint));
}

#[when("the CLI selects the pactl audio driver")]
fn when_cli_selects_pactl(harness: &Harness) {
    harness.push_cli_arg("--audio-driver");
    harness.push_cli_arg("pactl");
}

#[when("the configuration loads without overrides")]
fn when_load_without_overrides(harness: &Harness) {
    harness.load();
}

#[then("loading the configuration resolves the listen endpoint to {endpoint}")]
fn then_resolved_endpoint(harness: &Harness, endpoint: String) {
    let config = harness.loaded_config();
    assert_eq!(config.listen(), &parse_endpoint(&endpoint));
}

#[then("loading the configuration selects the pactl audio driver")]
fn then_pactl_selected(harness: &Harness) {
    let config = harness.loaded_config();
    assert_eq!(config.audio_driver(), AudioDriver::Pactl);
}

#[then("loading the configuration applies the built-in defaults")]
fn then_defaults_applied(harness: &Harness) {
    let config = harness.loaded_config();
    assert_eq!(config.listen(), &default_listen_endpoint());
    assert_eq!(config.log_filter(), default_log_filter());
    assert_eq!(config.log_format(), default_log_format());
    assert_eq!(config.audio_driver(), AudioDriver::Wpctl);
}

#[scenario(
    path = "tests/features/configuration_precedence.feature",
    name = "Built-in defaults apply when nothing is overridden"
)]
fn defaults_apply(#[from(harness)] harness: Harness) {
    let _ = harness;
}

#[scenario(
    path = "tests/features/configuration_precedence.feature",
    name = "A configuration file overrides the defaults"
)]
fn file_overrides_defaults(#[from(harness)] harness: Harness) {
    let _ = harness;
}

#[scenario(
    path = "tests/features/configuration_precedence.feature",
    name = "The environment overrides the configuration file"
)]
fn environment_overrides_file(#[from(harness)] harness: Harness) {
    let _ = harness;
}

#[scenario(
    path = "tests/features/configuration_precedence.feature",
    name = "The command line overrides every other source"
)]
fn cli_overrides_everything(#[from(harness)] harness: Harness) {
    let _ = harness;
}

#[scenario(
    path = "tests/features/configuration_precedence.feature",
    name = "The audio driver can be selected from the command line"
)]
fn cli_selects_audio_driver(#[from(harness)] harness: Harness) {
    let _ = harness;
}
