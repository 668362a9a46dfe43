pub mod upload_pdf_route;
pub mod upload_response;
