//! Prompt for Spanish grammar and syntax correction.
//!
//! Used by [`ChatClient`](crate::correction::ChatClient), which talks to a
//! chat-completions endpoint directly instead of going through the hosted
//! correction function.

/// System message: the rules the model must follow.
const SYSTEM_INSTRUCTION_ES: &str = "\
Eres un corrector experto de gramática y sintaxis en español.
Tu tarea:
1. Corrige cualquier error gramatical u ortográfico.
2. Arregla los problemas de sintaxis.
3. Mejora la claridad y la fluidez.
4. Conserva el significado y el tono originales.
5. Responde SOLO con el texto corregido, sin explicaciones ni comentarios.
6. Si el texto ya es correcto, devuélvelo tal cual.";

const FEW_SHOT_EXAMPLES_ES: &str = "
Ejemplos:
Entrada: \"este es un texto con herorres\"
Salida: \"Este es un texto con errores.\"

Entrada: \"ayer fuimos a el cine y la pelicula estubo muy buena\"
Salida: \"Ayer fuimos al cine y la película estuvo muy buena.\"
";

/// Build the `(system, user)` message pair for a chat-completions request.
///
/// ```
/// use text_corrector::correction::prompt::build_chat;
///
/// let (system, user) = build_chat("hola mundo");
/// assert!(system.contains("español"));
/// assert!(user.ends_with("hola mundo"));
/// ```
pub fn build_chat(text: &str) -> (String, String) {
    let mut system =
        String::with_capacity(SYSTEM_INSTRUCTION_ES.len() + FEW_SHOT_EXAMPLES_ES.len());
    system.push_str(SYSTEM_INSTRUCTION_ES);
    system.push_str(FEW_SHOT_EXAMPLES_ES);

    let user = format!("Texto a corregir:\n{text}");
    (system, user)
}
