//! Workspace-level integration tests for bigfib live under `tests/`.
