pub mod administrador_usuarios;
pub mod demo;
pub mod editar_cargar_libro;
pub mod editar_cargar_salon;
pub mod modificar_libro;
pub mod perfil_administrador;
pub mod single;
pub mod subir_libro;
