pub mod snapper;

pub use snapper::GridSnapper;
