//! Built-in playground examples and their canned outputs

/// A snippet the playground knows how to "run"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    pub title: &'static str,
    pub source: &'static str,
    pub output: &'static str,
}

pub static EXAMPLES: [Example; 3] = [
    Example {
        title: "List operations",
        source: concat!(
            "// Ejemplo 1: Operaciones con listas\n",
            "let numeros = [1..10]\n",
            "let resultado = \n",
            "    numeros\n",
            "    |> List.filter (fun x -> x % 2 = 0)\n",
            "    |> List.map (fun x -> x * 3)\n",
            "\n",
            "printfn \"Números pares multiplicados por 3: %A\" resultado",
        ),
        output: "Números pares multiplicados por 3: [6; 12; 18; 24; 30]",
    },
    Example {
        title: "Pattern matching",
        source: concat!(
            "// Ejemplo 2: Pattern Matching\n",
            "type Estado = \n",
            "    | Activo \n",
            "    | Inactivo \n",
            "    | Suspendido of string\n",
            "\n",
            "let describir estado =\n",
            "    match estado with\n",
            "    | Activo -> \"Usuario activo\"\n",
            "    | Inactivo -> \"Usuario inactivo\" \n",
            "    | Suspendido razon -> $\"Usuario suspendido: {razon}\"\n",
            "\n",
            "printfn \"%s\" (describir (Suspendido \"Violación de términos\"))",
        ),
        output: "Usuario suspendido: Violación de términos",
    },
    Example {
        title: "Records and Option",
        source: concat!(
            "// Ejemplo 3: Records y Option\n",
            "type Persona = {\n",
            "    Nombre: string\n",
            "    Edad: int\n",
            "    Email: string option\n",
            "}\n",
            "\n",
            "let persona = {\n",
            "    Nombre = \"María\"\n",
            "    Edad = 25\n",
            "    Email = Some \"maria@email.com\"\n",
            "}\n",
            "\n",
            "match persona.Email with\n",
            "| Some email -> printfn \"Email: %s\" email\n",
            "| None -> printfn \"No tiene email\"",
        ),
        output: "Email: maria@email.com",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_keep_trailing_spaces() {
        // Lookups are exact, so the significant whitespace must survive
        assert!(EXAMPLES[0].source.contains("let resultado = \n"));
        assert!(EXAMPLES[1].source.contains("| Activo \n"));
    }

    #[test]
    fn sources_start_with_comment_header() {
        for example in &EXAMPLES {
            assert!(example.source.starts_with("// Ejemplo"));
        }
    }
}
