mod application_command;
pub use application_command::{ApplicationCommand, ChatInputCommand, ContextMenuCommand};

mod application_command_type;
pub use application_command_type::{ApplicationCommandType, ContextMenuCommandType};

mod application_command_payload;
pub use application_command_payload::ApplicationCommandPayload;

mod application_command_option;
pub use application_command_option::{
    ApplicationCommandOption, ApplicationCommandOptionType, LeafOption, SubCommandGroupOption,
    SubCommandOption,
};

mod string_option;
pub use string_option::{AutocompleteStringOption, ChoicesStringOption, StringOption};

mod number_option;
pub use number_option::{
    AutocompleteNumberOption, ChoicesNumberOption, NumberOption, RangeNumberOption,
};

mod plain_option;
pub use plain_option::{
    BooleanOption, ChannelOption, MentionableOption, PlainOption, RoleOption, UserOption,
};

mod option_channel_type;
pub use option_channel_type::OptionChannelType;

mod command_option_number;
pub use command_option_number::CommandOptionNumber;

mod application_command_option_choice;
pub use application_command_option_choice::{
    ApplicationCommandOptionChoice, NumberOptionChoice, StringOptionChoice,
};

mod application_command_interaction_data;
pub use application_command_interaction_data::ApplicationCommandInteractionData;

mod application_command_interaction_data_option;
pub use application_command_interaction_data_option::{
    ApplicationCommandInteractionDataOption, BooleanInteractionData, ChannelInteractionData,
    IntegerInteractionData, InteractionDataOptionType, InteractionDataOptionValue,
    MentionableInteractionData, NumberInteractionData, RoleInteractionData,
    SnowflakeInteractionData, StringInteractionData, SubCommandGroupInteractionData,
    SubCommandInteractionData, UserInteractionData,
};

mod guild_application_command_permissions;
pub use guild_application_command_permissions::{
    ApplicationCommandPermissionType, ApplicationCommandPermissions,
    BatchEditApplicationCommandPermissions, GuildApplicationCommandPermissions,
};
