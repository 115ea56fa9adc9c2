/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Token request, token response and cached token
pub mod auth;
/// Authenticated HTTP request layer
pub mod http;
/// Query parameters
pub mod params;
/// Typed request bodies for resource creation
pub mod requests;
