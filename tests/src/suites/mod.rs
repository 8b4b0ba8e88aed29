//! Vector suites understood by the harness
