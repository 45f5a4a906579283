use minegocio_clientes::domain::cliente::{NewCliente, UpdateCliente};
use minegocio_clientes::domain::direccion::NewDireccion;
use minegocio_clientes::domain::types::TipoIdentificacion;
use minegocio_clientes::repository::errors::RepositoryError;
use minegocio_clientes::repository::{
    ClienteReader, ClienteSearchQuery, ClienteWriter, DieselRepository, DireccionReader,
    DireccionWriter,
};

mod common;

fn nuevo_cliente(numero: &str, nombres: &str) -> NewCliente {
    NewCliente::new(
        1,
        TipoIdentificacion::Cedula,
        numero.to_string(),
        nombres.to_string(),
        None,
        None,
    )
}

fn nueva_direccion(texto: &str) -> NewDireccion {
    NewDireccion::new(
        "Pichincha".to_string(),
        "Quito".to_string(),
        texto.to_string(),
    )
}

#[test]
fn test_create_cliente_with_matriz() {
    let test_db = common::TestDb::new("test_create_cliente_with_matriz.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let (cliente, matriz) = repo
        .create_cliente(
            &nuevo_cliente("1234567890", "Cliente Test"),
            &nueva_direccion("Av. Test 123"),
        )
        .unwrap();

    assert_eq!(cliente.empresa_id, 1);
    assert_eq!(cliente.tipo_identificacion, TipoIdentificacion::Cedula);
    assert_eq!(cliente.nombres, "Cliente Test");
    assert!(matriz.es_matriz);
    assert_eq!(matriz.cliente_id, cliente.id);
    assert_eq!(matriz.direccion_completa(), "Av. Test 123, Quito, Pichincha");

    assert_eq!(repo.count_direcciones(cliente.id).unwrap(), 1);
    assert!(repo.tiene_matriz(cliente.id).unwrap());
    assert!(repo.cliente_exists(cliente.id).unwrap());
}

#[test]
fn test_unique_index_rejects_duplicate_identificacion() {
    let test_db = common::TestDb::new("test_unique_index_rejects_duplicate.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    repo.create_cliente(
        &nuevo_cliente("1234567890", "Cliente Uno"),
        &nueva_direccion("Av. Uno"),
    )
    .unwrap();

    // Same (empresa, tipo, numero) tuple: the database index is the authority.
    let err = repo
        .create_cliente(
            &nuevo_cliente("1234567890", "Cliente Dos"),
            &nueva_direccion("Av. Dos"),
        )
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));

    // Changing one field of the tuple allows the insert.
    let distinto = NewCliente::new(
        1,
        TipoIdentificacion::Pasaporte,
        "1234567890".to_string(),
        "Cliente Dos".to_string(),
        None,
        None,
    );
    assert!(
        repo.create_cliente(&distinto, &nueva_direccion("Av. Dos"))
            .is_ok()
    );
}

#[test]
fn test_identificacion_en_uso_respects_exclusion() {
    let test_db = common::TestDb::new("test_identificacion_en_uso.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let (cliente, _) = repo
        .create_cliente(
            &nuevo_cliente("1234567890", "Cliente Test"),
            &nueva_direccion("Av. Test 123"),
        )
        .unwrap();

    assert!(
        repo.identificacion_en_uso(1, TipoIdentificacion::Cedula, "1234567890", None)
            .unwrap()
    );
    // The row itself is excluded when checking for an update.
    assert!(
        !repo
            .identificacion_en_uso(1, TipoIdentificacion::Cedula, "1234567890", Some(cliente.id))
            .unwrap()
    );
    // Different tenant, same tuple values.
    assert!(
        !repo
            .identificacion_en_uso(2, TipoIdentificacion::Cedula, "1234567890", None)
            .unwrap()
    );
}

#[test]
fn test_update_cliente_does_not_touch_direcciones() {
    let test_db = common::TestDb::new("test_update_cliente.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let (cliente, _) = repo
        .create_cliente(
            &nuevo_cliente("1234567890", "Cliente Test"),
            &nueva_direccion("Av. Test 123"),
        )
        .unwrap();
    repo.create_direccion_adicional(cliente.id, &nueva_direccion("Calle Secundaria 45"))
        .unwrap();

    let antes = repo.list_direcciones(cliente.id).unwrap();

    let updates = UpdateCliente::new(
        TipoIdentificacion::Ruc,
        "1790012345001".to_string(),
        "Cliente Renombrado".to_string(),
        Some("nuevo@example.com".to_string()),
        None,
    );
    let actualizado = repo.update_cliente(cliente.id, &updates).unwrap();

    assert_eq!(actualizado.nombres, "Cliente Renombrado");
    assert_eq!(actualizado.tipo_identificacion, TipoIdentificacion::Ruc);
    assert_eq!(actualizado.correo.as_deref(), Some("nuevo@example.com"));
    assert_eq!(actualizado.empresa_id, cliente.empresa_id);
    assert_eq!(actualizado.created_at, cliente.created_at);

    let despues = repo.list_direcciones(cliente.id).unwrap();
    assert_eq!(antes, despues);
}

#[test]
fn test_delete_cliente_cascades_to_direcciones() {
    let test_db = common::TestDb::new("test_delete_cliente_cascades.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let (cliente, matriz) = repo
        .create_cliente(
            &nuevo_cliente("1234567890", "Cliente Test"),
            &nueva_direccion("Av. Test 123"),
        )
        .unwrap();
    let adicional = repo
        .create_direccion_adicional(cliente.id, &nueva_direccion("Calle Secundaria 45"))
        .unwrap();

    repo.delete_cliente(cliente.id).unwrap();

    assert!(repo.get_cliente_by_id(cliente.id).unwrap().is_none());
    assert!(repo.list_direcciones(cliente.id).unwrap().is_empty());
    assert!(repo.get_direccion_by_id(matriz.id).unwrap().is_none());
    assert!(repo.get_direccion_by_id(adicional.id).unwrap().is_none());

    assert!(matches!(
        repo.delete_cliente(cliente.id).unwrap_err(),
        RepositoryError::NotFound
    ));
}

#[test]
fn test_list_direcciones_matriz_first_then_creation_order() {
    let test_db = common::TestDb::new("test_list_direcciones_order.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let (cliente, matriz) = repo
        .create_cliente(
            &nuevo_cliente("1234567890", "Cliente Test"),
            &nueva_direccion("Av. Test 123"),
        )
        .unwrap();
    let primera = repo
        .create_direccion_adicional(cliente.id, &nueva_direccion("Adicional Uno"))
        .unwrap();
    let segunda = repo
        .create_direccion_adicional(cliente.id, &nueva_direccion("Adicional Dos"))
        .unwrap();

    let todas = repo.list_direcciones(cliente.id).unwrap();
    let ids: Vec<i32> = todas.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![matriz.id, primera.id, segunda.id]);
    assert!(todas[0].es_matriz);

    let adicionales = repo.list_direcciones_adicionales(cliente.id).unwrap();
    let ids: Vec<i32> = adicionales.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![primera.id, segunda.id]);
    assert!(adicionales.iter().all(|d| !d.es_matriz));

    assert_eq!(repo.count_direcciones(cliente.id).unwrap(), 3);
    assert_eq!(repo.count_direcciones_adicionales(cliente.id).unwrap(), 2);
}

#[test]
fn test_search_clientes_attaches_matriz_only() {
    let test_db = common::TestDb::new("test_search_clientes.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let (cliente, matriz) = repo
        .create_cliente(
            &nuevo_cliente("1234567890", "Cliente Test"),
            &nueva_direccion("Av. Test 123"),
        )
        .unwrap();
    repo.create_direccion_adicional(cliente.id, &nueva_direccion("Adicional Uno"))
        .unwrap();
    repo.create_cliente(
        &NewCliente::new(
            1,
            TipoIdentificacion::Ruc,
            "1790012345001".to_string(),
            "Empresa Andina".to_string(),
            None,
            None,
        ),
        &nueva_direccion("Av. Empresa"),
    )
    .unwrap();
    // Another tenant never shows up.
    repo.create_cliente(
        &NewCliente::new(
            2,
            TipoIdentificacion::Cedula,
            "1234567890".to_string(),
            "Cliente Ajeno".to_string(),
            None,
            None,
        ),
        &nueva_direccion("Av. Ajena"),
    )
    .unwrap();

    let todos = repo.search_clientes(&ClienteSearchQuery::new(1)).unwrap();
    assert_eq!(todos.len(), 2);
    let (encontrado, encontrado_matriz) = todos
        .iter()
        .find(|(c, _)| c.id == cliente.id)
        .expect("cliente missing from listing");
    assert_eq!(encontrado.nombres, "Cliente Test");
    assert_eq!(encontrado_matriz.as_ref().map(|d| d.id), Some(matriz.id));

    // Substring on nombres, case-insensitive.
    let por_nombre = repo
        .search_clientes(&ClienteSearchQuery::new(1).busqueda("andina"))
        .unwrap();
    assert_eq!(por_nombre.len(), 1);
    assert_eq!(por_nombre[0].0.nombres, "Empresa Andina");

    // Substring on numero_identificacion.
    let por_numero = repo
        .search_clientes(&ClienteSearchQuery::new(1).busqueda("179001"))
        .unwrap();
    assert_eq!(por_numero.len(), 1);

    // Blank search terms are ignored.
    let en_blanco = repo
        .search_clientes(&ClienteSearchQuery::new(1).busqueda("   "))
        .unwrap();
    assert_eq!(en_blanco.len(), 2);

    let sin_resultados = repo
        .search_clientes(&ClienteSearchQuery::new(1).busqueda("inexistente"))
        .unwrap();
    assert!(sin_resultados.is_empty());
}

#[test]
fn test_get_cliente_by_identificacion() {
    let test_db = common::TestDb::new("test_get_by_identificacion.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    repo.create_cliente(
        &nuevo_cliente("1234567890", "Cliente Test"),
        &nueva_direccion("Av. Test 123"),
    )
    .unwrap();

    let encontrado = repo.get_cliente_by_identificacion(1, "1234567890").unwrap();
    assert_eq!(encontrado.map(|c| c.nombres), Some("Cliente Test".into()));

    assert!(repo.get_cliente_by_identificacion(1, "999").unwrap().is_none());
    assert!(
        repo.get_cliente_by_identificacion(2, "1234567890")
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_search_direcciones_matches_all_components() {
    let test_db = common::TestDb::new("test_search_direcciones.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let (cliente, _) = repo
        .create_cliente(
            &nuevo_cliente("1234567890", "Cliente Test"),
            &nueva_direccion("Av. Test 123"),
        )
        .unwrap();
    repo.create_direccion_adicional(
        cliente.id,
        &NewDireccion::new(
            "Azuay".to_string(),
            "Cuenca".to_string(),
            "Calle Larga 456".to_string(),
        ),
    )
    .unwrap();

    let por_provincia = repo.search_direcciones(cliente.id, "Azuay").unwrap();
    assert_eq!(por_provincia.len(), 1);
    assert_eq!(por_provincia[0].ciudad, "Cuenca");

    let por_ciudad = repo.search_direcciones(cliente.id, "quito").unwrap();
    assert_eq!(por_ciudad.len(), 1);
    assert!(por_ciudad[0].es_matriz);

    let por_texto = repo.search_direcciones(cliente.id, "Larga").unwrap();
    assert_eq!(por_texto.len(), 1);

    assert!(repo.search_direcciones(cliente.id, "Guayas").unwrap().is_empty());
}

#[test]
fn test_count_clientes_por_empresa() {
    let test_db = common::TestDb::new("test_count_clientes.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    assert_eq!(repo.count_clientes_por_empresa(1).unwrap(), 0);

    repo.create_cliente(
        &nuevo_cliente("1234567890", "Cliente Uno"),
        &nueva_direccion("Av. Uno"),
    )
    .unwrap();
    repo.create_cliente(
        &nuevo_cliente("0987654321", "Cliente Dos"),
        &nueva_direccion("Av. Dos"),
    )
    .unwrap();

    assert_eq!(repo.count_clientes_por_empresa(1).unwrap(), 2);
    assert_eq!(repo.count_clientes_por_empresa(2).unwrap(), 0);
}
