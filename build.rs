use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Carrega variáveis do .env (se existir) como env vars de compilação,
    // para que o config.rs possa lê-las via option_env!
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim();

                    // Não sobrescreve variáveis já definidas no ambiente
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=Nenhum arquivo .env encontrado. Usando valores padrão. Copie .env.example para .env se quiser configurar o backend.");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
}
