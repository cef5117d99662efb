//! # Built-in Plugins
//!
//! File: cli/src/synth/plugins/mod.rs
//!
//! - `nextjs`: Next.js App Router with Tailwind
//! - `react`: React + Vite
//! - `node`: Express APIs
//! - `python`: FastAPI services
//! - `generic`: shared rules only; the registry's fallback
//!
//! `frontend` holds the component templates `nextjs` and `react` share.
//!
mod frontend;
pub mod generic;
pub mod nextjs;
pub mod node;
pub mod python;
pub mod react;

pub use generic::GenericPlugin;
pub use nextjs::NextJsPlugin;
pub use node::NodePlugin;
pub use python::PythonPlugin;
pub use react::ReactPlugin;
