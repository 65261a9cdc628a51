/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// HTTP client with token authentication, rate limiting and retry
pub mod http;
/// Retry configuration for HTTP requests
pub mod retry;
