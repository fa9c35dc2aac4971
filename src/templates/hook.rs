pub const HOOK_TEMPLATE: &str = r#"#!/bin/sh
#
# A hook script to prevent committing sensitive information.

# Run the secret scanner
leakcheck scan
if [ $? -ne 0 ]; then
    echo "Error: Secrets found in the code. Aborting commit."
    exit 1
fi

exit 0
"#;
