pub mod backend_url;
pub mod feedback;
pub mod libros;
pub mod navbar;
pub mod panel_administrador;
pub mod sidebar;
