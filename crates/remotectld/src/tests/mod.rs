//! Test suites for the remote control daemon.

mod support;
