pub mod peerreviews;

pub use peerreviews::configure_peerreview_routes;
