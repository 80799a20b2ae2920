//! Status codes the API tests assert against.

pub const RESPONSE_STATUS_CODE_200: u16 = 200;
pub const RESPONSE_STATUS_CODE_201: u16 = 201;
pub const RESPONSE_STATUS_CODE_204: u16 = 204;
pub const RESPONSE_STATUS_CODE_404: u16 = 404;
pub const RESPONSE_STATUS_CODE_500: u16 = 500;
