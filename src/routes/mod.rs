/**
 * HTTP Routes
 *
 * This module assembles the server's route tables into the final router.
 */

pub mod api_routes;
pub mod router;

pub use router::create_router;
