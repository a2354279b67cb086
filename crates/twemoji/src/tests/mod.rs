//! Unit and behaviour tests for twemoji.
