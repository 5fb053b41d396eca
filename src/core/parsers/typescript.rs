use std::sync::Arc;

use swc_common::{BytePos, FileName, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// A parsed TypeScript module together with the position its source file
/// was registered at in the owning `SourceMap`.
pub struct ParsedModule {
    pub module: Module,
    pub start_pos: BytePos,
}

/// Parse TypeScript source code into an AST.
///
/// Each call registers the code in the given `SourceMap`; callers running in
/// parallel should hand every file its own map, as `load` does.
pub fn parse_typescript_source(
    code: String,
    file_path: &str,
    is_declaration: bool,
    source_map: Arc<SourceMap>,
) -> Result<ParsedModule, String> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: false,
            decorators: true,
            dts: is_declaration,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let module = parser
            .parse_module()
            .map_err(|e| format!("{:?}", e))?;

        // Recovered errors still mean the file is not valid TypeScript.
        if let Some(err) = parser.take_errors().into_iter().next() {
            return Err(format!("{:?}", err));
        }

        Ok(ParsedModule {
            module,
            start_pos: source_file.start_pos,
        })
    })
}
