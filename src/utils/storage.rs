use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Grava uma string crua (o token é persistido sem envelope JSON)
pub fn save_raw(key: &str, value: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("Não foi possível acessar o localStorage")?;
    storage.set_item(key, value)
        .map_err(|_| "Erro gravando no localStorage".to_string())?;
    Ok(())
}

pub fn load_raw(key: &str) -> Option<String> {
    let storage = get_local_storage()?;
    storage.get_item(key).ok()?
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("Não foi possível acessar o localStorage")?;
    storage.remove_item(key)
        .map_err(|_| "Erro removendo do localStorage".to_string())?;
    Ok(())
}
