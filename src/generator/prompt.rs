//! Instruction template for README generation

/// Fixed instruction block prepended to every generation request
pub const README_INSTRUCTIONS: &str = r#"Act as an expert Technical Writer.

You will receive a compact summary of a public GitHub repository, including:
- Basic repository metadata (owner, repo name).
- A subset of key files such as README.md, package.json, requirements.txt or go.mod.
- A detected technology stack (frameworks, languages, databases).

Using ONLY the information provided below under "Repository data", generate a complete, production-ready README.md in **English** with a clear, professional tone.

Strict requirements:
- Do not invent features, APIs, or technologies that are not clearly implied by the data.
- If something is not specified (e.g. license, deployment steps), add a short generic note instead of hallucinating details.
- Prefer concise, scannable sections over long paragraphs.

The README.md MUST include, in this order:
1. Project title and one-sentence tagline.
2. Short description / overview.
3. A **Tech Stack** section using a Markdown table. Use the detected technologies (frameworks, languages, databases, tooling) when possible. Example columns: Technology | Category | Notes.
4. **Features** section (bulleted list; only based on what's reasonably inferred from the data).
5. **Prerequisites** section (Node.js / Python / Go / databases, etc., only when implied by dependencies).
6. **Installation** section with copy-pastable commands (npm / yarn / pnpm / pip / go, etc., depending on the stack).
7. **Usage** section with basic examples (how to run dev server, build, run tests, or binary, depending on the data).
8. **Scripts** (or Commands) section if a package.json or similar exists, summarizing the most relevant scripts.
9. **Folder structure** (optional, only if it can be reasonably inferred from the provided data).
10. **Contributing** section (generic but professional guidelines are fine).
11. **License** section (if the license can be inferred from the data; otherwise, add a short note indicating that the license is not clearly specified).

Formatting rules:
- Use clean Markdown: headings (##, ###), bullet lists, and tables where appropriate.
- Use code blocks for command-line instructions and code examples.
- Avoid HTML unless strictly necessary.

Repository data (files, dependencies, technologies, and languages):"#;

/// Builds the full prompt from the assembled repository context
pub fn build_readme_prompt(context: &str) -> String {
    format!("{README_INSTRUCTIONS}\n{context}")
}
